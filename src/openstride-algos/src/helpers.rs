pub mod float_math;
