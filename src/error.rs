use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    EmptyHeap,
    IndexOutOfRange(usize),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::EmptyHeap => {
                write!(f, "heap is empty")
            }
            HeapError::IndexOutOfRange(i) => {
                write!(f, "index {} is outside the heap", i)
            }
        }
    }
}

impl Error for HeapError {}
