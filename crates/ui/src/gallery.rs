use serde::{Deserialize, Serialize};

use sangam_core::{DomainError, DomainResult};

/// Product image gallery: which image is showing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GalleryState")]
pub struct Gallery {
    index: usize,
    len: usize,
}

/// Wire shape of a [`Gallery`]; checked before it becomes one.
#[derive(Deserialize)]
struct GalleryState {
    index: usize,
    len: usize,
}

impl TryFrom<GalleryState> for Gallery {
    type Error = DomainError;

    fn try_from(state: GalleryState) -> DomainResult<Self> {
        let mut gallery = Gallery::new(state.len)?;
        if !gallery.select(state.index) {
            return Err(DomainError::validation(format!(
                "gallery index {} out of range for {} images",
                state.index, state.len
            )));
        }
        Ok(gallery)
    }
}

impl Gallery {
    pub fn new(image_count: usize) -> DomainResult<Self> {
        if image_count == 0 {
            return Err(DomainError::validation("gallery needs at least one image"));
        }
        Ok(Self {
            index: 0,
            len: image_count,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn image_count(&self) -> usize {
        self.len
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }

    /// Advance, wrapping from the last image to the first.
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Go back, wrapping from the first image to the last.
    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_is_rejected() {
        assert!(matches!(Gallery::new(0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut gallery = Gallery::new(3).unwrap();
        assert_eq!(gallery.prev(), 2);
        assert_eq!(gallery.next(), 0);
        assert_eq!(gallery.next(), 1);
        assert_eq!(gallery.next(), 2);
        assert_eq!(gallery.next(), 0);
    }

    #[test]
    fn single_image_stays_put() {
        let mut gallery = Gallery::new(1).unwrap();
        assert_eq!(gallery.next(), 0);
        assert_eq!(gallery.prev(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut gallery = Gallery::new(3).unwrap();
        assert!(gallery.select(2));
        assert!(gallery.is_selected(2));
        assert!(!gallery.select(3));
        assert_eq!(gallery.index(), 2);
    }

    #[test]
    fn deserialize_enforces_constructor_checks() {
        assert!(serde_json::from_str::<Gallery>(r#"{"index":0,"len":0}"#).is_err());
        assert!(serde_json::from_str::<Gallery>(r#"{"index":9,"len":3}"#).is_err());

        let mut gallery: Gallery = serde_json::from_str(r#"{"index":2,"len":3}"#).unwrap();
        assert_eq!(gallery.index(), 2);
        assert_eq!(gallery.next(), 0);
    }

    #[test]
    fn serialized_gallery_reads_back() {
        let mut gallery = Gallery::new(4).unwrap();
        gallery.select(3);
        let json = serde_json::to_string(&gallery).unwrap();
        assert_eq!(serde_json::from_str::<Gallery>(&json).unwrap(), gallery);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: any walk keeps the index in range, and next undoes prev.
            #[test]
            fn index_stays_in_range(len in 1usize..10, moves in proptest::collection::vec(any::<bool>(), 0..50)) {
                let mut gallery = Gallery::new(len).unwrap();
                for forward in moves {
                    let before = gallery.index();
                    if forward {
                        gallery.next();
                        prop_assert!(gallery.index() < len);
                        gallery.prev();
                    } else {
                        gallery.prev();
                        prop_assert!(gallery.index() < len);
                        gallery.next();
                    }
                    prop_assert_eq!(gallery.index(), before);
                    gallery.next();
                }
            }
        }
    }
}
