// Random pivot quicksort with a two cursor partition.
pub mod quick;

// Out-of-place sort through a bulk built binary min-heap.
pub mod heap;
