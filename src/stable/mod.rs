// Adjacent swap insertion sort.
pub mod insertion;

// Bidirectional bubble sort with last swap boundaries.
pub mod cocktail;

// Top-down merge sort, extra element goes to the right half.
pub mod merge;

// Base 10 LSD radix sort for i32, 19 signed digit buckets.
pub mod lsd_radix;
