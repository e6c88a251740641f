use serde::{Deserialize, Serialize};

use sangam_core::{Entity, TestimonialId};

/// Customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub location: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Free text; not a product reference.
    pub product_purchased: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Entity for Testimonial {
    type Id = TestimonialId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Question/answer pair shown in the contact page accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
