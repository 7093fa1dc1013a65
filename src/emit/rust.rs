use super::code_writer::CodeWriter;
use super::GENERATED_HEADER;
use crate::config::Settings;
use crate::layout::{Block, BlockSet, Field};

pub const INTERFACE_NAME: &str = "InlineArray";

pub fn render_interface() -> String {
    let mut w = CodeWriter::new();

    w.line(GENERATED_HEADER);
    w.blank();

    w.line("/// Fixed-length storage for `T`, laid out as one contiguous run of elements.");
    w.enter_scope(&format!("pub trait {INTERFACE_NAME}<T: Copy>"));

    w.line("/// Number of elements.");
    w.line("fn len(&self) -> usize;");
    w.blank();

    w.line("/// The elements as one flat slice.");
    w.line("fn as_slice(&self) -> &[T];");
    w.blank();

    w.line("/// The elements as one flat mutable slice.");
    w.line("fn as_mut_slice(&mut self) -> &mut [T];");
    w.blank();

    w.enter_scope("fn is_empty(&self) -> bool");
    w.line("self.len() == 0");
    w.leave_scope();
    w.blank();

    w.line("/// Element at `index`. Panics if `index >= self.len()`.");
    w.enter_scope("fn element_at(&self, index: usize) -> &T");
    w.line("&self.as_slice()[index]");
    w.leave_scope();
    w.blank();

    w.line("/// Element at `index`. Panics if `index >= self.len()`.");
    w.enter_scope("fn element_at_mut(&mut self, index: usize) -> &mut T");
    w.line("&mut self.as_mut_slice()[index]");
    w.leave_scope();

    w.leave_scope();

    w.finish()
}

pub fn render_arrays(blocks: &BlockSet, settings: &Settings) -> String {
    let mut w = CodeWriter::new();

    w.line(GENERATED_HEADER);
    w.blank();
    w.line(&format!("use {}::{INTERFACE_NAME};", settings.interface_path));

    for block in blocks.iter() {
        w.blank();
        render_block(&mut w, block, &settings.type_prefix);
    }

    w.finish()
}

fn render_block(w: &mut CodeWriter, block: &Block, prefix: &str) {
    let name = format!("{prefix}{}", block.size);

    w.line("#[repr(C)]");
    w.line("#[derive(Clone, Copy, Default)]");
    w.enter_scope(&format!("pub struct {name}<T: Copy>"));

    for (field_name, field) in block.named_fields() {
        match field {
            Field::Element => w.line(&format!("{field_name}: T,")),
            Field::Nested { size, .. } => w.line(&format!("{field_name}: {prefix}{size}<T>,")),
        }
    }

    w.leave_scope();
    w.blank();

    w.enter_scope(&format!("impl<T: Copy> {name}<T>"));
    w.line(&format!("pub const LENGTH: usize = {};", block.size));
    w.leave_scope();
    w.blank();

    // Every field is made of `T`s and the struct is `repr(C)`, so the block is
    // exactly `LENGTH` elements with no padding, starting at offset 0.
    w.enter_scope(&format!("impl<T: Copy> {INTERFACE_NAME}<T> for {name}<T>"));

    w.enter_scope("fn len(&self) -> usize");
    w.line("Self::LENGTH");
    w.leave_scope();
    w.blank();

    w.enter_scope("fn as_slice(&self) -> &[T]");
    w.line("unsafe { core::slice::from_raw_parts((self as *const Self).cast::<T>(), Self::LENGTH) }");
    w.leave_scope();
    w.blank();

    w.enter_scope("fn as_mut_slice(&mut self) -> &mut [T]");
    w.line("unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<T>(), Self::LENGTH) }");
    w.leave_scope();

    w.leave_scope();
}
