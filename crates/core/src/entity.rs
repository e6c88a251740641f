//! Catalogue records that are told apart by id rather than by their fields.

/// A product, category or testimonial: two records with the same id are the
/// same record, so a catalogue may hold each id only once.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// The id that must be unique within its table.
    fn id(&self) -> &Self::Id;
}
