use crate::capacity::Capacity;
use crate::decompose::DecompositionPlan;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// A single `T`.
    Element,
    /// An earlier block embedded whole. `ordinal` is the field's position in
    /// its owner, which keeps names unique when a size is reused.
    Nested { size: Capacity, ordinal: usize },
}

impl Field {
    /// Number of `T`s this field occupies.
    pub fn extent(&self) -> usize {
        match self {
            Field::Element => 1,
            Field::Nested { size, .. } => size.get(),
        }
    }

    pub fn name(&self, position: usize) -> String {
        match self {
            Field::Element => format!("_e{position}"),
            Field::Nested { ordinal: 1, .. } => "_other".to_string(),
            Field::Nested { ordinal, .. } => format!("_other{ordinal}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub size: Capacity,
    pub fields: Vec<Field>,
}

impl Block {
    pub fn extent(&self) -> usize {
        self.fields.iter().map(Field::extent).sum()
    }

    pub fn named_fields(&self) -> impl Iterator<Item = (String, &Field)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.name(position), field))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = [", self.size)?;

        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            match field {
                Field::Element => write!(f, "T")?,
                Field::Nested { size, .. } => write!(f, "{size}")?,
            }
        }

        write!(f, "]")
    }
}

/// Lays out a block from its plan: one leading element, then a field per
/// planned part.
pub fn compose(plan: &DecompositionPlan) -> Block {
    let mut fields = Vec::with_capacity(plan.parts.len() + 1);
    fields.push(Field::Element);

    for (i, &size) in plan.parts.iter().enumerate() {
        let ordinal = i + 1;

        if size == Capacity::ONE {
            fields.push(Field::Element);
        } else {
            fields.push(Field::Nested { size, ordinal });
        }
    }

    Block {
        size: plan.target,
        fields,
    }
}

/// A block's layout with every nested field expanded down to single elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutElement {
    Atom,
    Compound(Vec<(String, LayoutElement)>),
}

impl LayoutElement {
    pub fn extent(&self) -> usize {
        match self {
            LayoutElement::Atom => 1,
            LayoutElement::Compound(fields) => fields.iter().map(|(_, e)| e.extent()).sum(),
        }
    }

    /// Field path of every element, in memory order. Index `i` of the result
    /// is the path reaching flat element `i`.
    pub fn element_paths(&self) -> Vec<String> {
        fn inner(element: &LayoutElement, prefix: &str, out: &mut Vec<String>) {
            match element {
                LayoutElement::Atom => out.push(prefix.to_string()),
                LayoutElement::Compound(fields) => {
                    for (name, field) in fields {
                        let path = if prefix.is_empty() {
                            name.clone()
                        } else {
                            format!("{prefix}.{name}")
                        };

                        inner(field, &path, out);
                    }
                }
            }
        }

        let mut out = Vec::with_capacity(self.extent());
        inner(self, "", &mut out);
        out
    }
}

/// Blocks generated so far in one pass, keyed by size so the decomposer can
/// ask for the largest one that fits.
#[derive(Clone, Debug, Default)]
pub struct BlockSet {
    blocks: BTreeMap<Capacity, Block>,
    order: Vec<Capacity>,
}

impl BlockSet {
    pub fn new() -> BlockSet {
        BlockSet {
            blocks: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn contains(&self, size: Capacity) -> bool {
        self.blocks.contains_key(&size)
    }

    pub fn get(&self, size: Capacity) -> Option<&Block> {
        self.blocks.get(&size)
    }

    /// Most recently generated size.
    pub fn last(&self) -> Option<Capacity> {
        self.order.last().copied()
    }

    /// Blocks in the order they were generated.
    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.order.iter().filter_map(|size| self.blocks.get(size))
    }

    pub fn largest_fitting(&self, limit: usize) -> Option<Capacity> {
        let limit = Capacity::new(limit as i64).ok()?;
        self.blocks.range(..=limit).next_back().map(|(size, _)| *size)
    }

    /// Adds a freshly composed block after checking that its fields add up
    /// and only reach back to smaller blocks already in the set.
    pub fn insert(&mut self, block: Block) -> Result<()> {
        let capacity = block.size;
        let violation = |reason: String| Error::LayoutInvariantViolation { capacity, reason };

        if self.contains(capacity) {
            return Err(violation("block was already generated".to_string()));
        }

        if block.fields.first() != Some(&Field::Element) {
            return Err(violation("first field must be a single element".to_string()));
        }

        let extent = block.extent();
        if extent != capacity.get() {
            return Err(violation(format!("fields hold {extent} elements")));
        }

        for field in &block.fields {
            if let Field::Nested { size, .. } = field {
                if *size >= capacity {
                    return Err(violation(format!("nests block {size}, which is not smaller")));
                }

                if !self.contains(*size) {
                    return Err(violation(format!("nests block {size}, which does not exist yet")));
                }
            }
        }

        self.order.push(capacity);
        self.blocks.insert(capacity, block);

        Ok(())
    }

    /// Expands a block recursively. `None` if the size was never generated.
    pub fn expand(&self, size: Capacity) -> Option<LayoutElement> {
        let block = self.get(size)?;

        let mut fields = Vec::with_capacity(block.fields.len());

        for (name, field) in block.named_fields() {
            let element = match field {
                Field::Element => LayoutElement::Atom,
                Field::Nested { size, .. } => self.expand(*size)?,
            };

            fields.push((name, element));
        }

        Some(LayoutElement::Compound(fields))
    }

    #[cfg(test)]
    pub(crate) fn without(mut self, size: Capacity) -> BlockSet {
        self.blocks.remove(&size);
        self.order.retain(|s| *s != size);
        self
    }
}
