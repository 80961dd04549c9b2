//! Cart data types and the pure cart arithmetic.

/// A single confirmed selection in the cart.
///
/// Lines are append-only: adding the same item twice produces two lines
/// rather than merging quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.unit_price)
    }
}

/// The operator's in-progress, unsubmitted selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a confirmed line. Quantity validation happens in the session
    /// actor; the cart never stores a zero-quantity line.
    pub(crate) fn push(&mut self, line: CartLine) {
        debug_assert!(line.quantity > 0);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantity × unit price over all lines; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Renders `"<name> <qty>개"` per line, joined with `", "` and no
    /// trailing separator.
    pub fn order_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{} {}개", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
