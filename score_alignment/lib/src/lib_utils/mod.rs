pub mod alphabet;
pub mod columns;
pub mod error;
pub mod fasta;
pub mod matrix;
pub mod metrics;
pub mod rle;
pub mod struct_helper;
pub mod table;
