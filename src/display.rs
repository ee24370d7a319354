use std::io::{self, Write};

use crate::heap::MinHeap;

/// Writes the heap's live elements as `[a, b, c]`, optionally preceded by a
/// label line. Presentation only; the heap is read through its accessors.
pub fn render(heap: &MinHeap, label: Option<&str>, out: &mut impl Write) -> io::Result<()> {
    if let Some(label) = label {
        writeln!(out, "{}", label)?;
    }
    write!(out, "[")?;
    for (i, value) in heap.values().iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", value)?;
    }
    writeln!(out, "]")
}
