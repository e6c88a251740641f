//! Built-in catalogue content.
//!
//! Compiled in and valid by construction; `Catalog::sample()` wraps it without
//! re-validating.

use sangam_core::{CategoryId, ProductId, Rupees, Slug, TestimonialId};

use crate::category::Category;
use crate::product::{Product, Specifications};
use crate::store::CatalogData;
use crate::testimonial::{Faq, Testimonial};

const IMG: &str = "https://images.unsplash.com/photo-";
const IMG_PARAMS: &str = "?w=800&q=80";

fn image(id: &str) -> String {
    format!("{IMG}{id}{IMG_PARAMS}")
}

fn images(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| image(id)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(id: &str, name: &str, slug: &str, description: &str, img: &str, count: u32) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        slug: Slug::new_unchecked(slug),
        description: description.to_string(),
        image: image(img),
        product_count: count,
    }
}

fn specs(
    dimensions: &str,
    material: &str,
    finish: &str,
    warranty: &str,
    weight: &str,
    assembly: &str,
) -> Specifications {
    Specifications {
        dimensions: dimensions.to_string(),
        material: material.to_string(),
        finish: finish.to_string(),
        warranty: warranty.to_string(),
        weight: Some(weight.to_string()),
        assembly: Some(assembly.to_string()),
    }
}

fn testimonial(id: &str, name: &str, location: &str, rating: u8, comment: &str, purchased: &str) -> Testimonial {
    Testimonial {
        id: TestimonialId::new(id),
        name: name.to_string(),
        location: location.to_string(),
        rating,
        comment: comment.to_string(),
        product_purchased: purchased.to_string(),
        avatar: None,
    }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category("1", "Living Room", "living-room", "Elegant sofas, coffee tables, and entertainment units", "1555041469-a586c61ea9bc", 45),
        category("2", "Bedroom", "bedroom", "Comfortable beds, wardrobes, and dressers", "1505693416388-ac5ce068fe85", 38),
        category("3", "Office", "office", "Professional desks, chairs, and storage solutions", "1518455027359-f3f8164ba6bd", 28),
        category("4", "Dining", "dining", "Beautiful dining tables and chairs for family gatherings", "1617806118233-18e1de247200", 22),
        category("5", "Custom Furniture", "custom", "Bespoke furniture tailored to your specifications", "1538688525198-9b88f6f53126", 15),
        category("6", "Storage", "storage", "Smart storage solutions for every room", "1595428774223-ef52624120d2", 32),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Royal Teak Wood Sofa Set".into(),
            slug: Slug::new_unchecked("royal-teak-wood-sofa-set"),
            category: "Living Room".into(),
            category_slug: Slug::new_unchecked("living-room"),
            price: Rupees(89999),
            original_price: Some(Rupees(110000)),
            description: "Experience unparalleled comfort with our Royal Teak Wood Sofa Set. Crafted from premium Burmese teak, this 3+1+1 seater set features hand-carved armrests and plush cushions upholstered in premium fabric. The natural wood grain adds warmth to any living space while the ergonomic design ensures lasting comfort.".into(),
            short_description: "Premium 3+1+1 teak wood sofa with hand-carved details".into(),
            images: images(&["1555041469-a586c61ea9bc", "1493663284031-b7e3aefcae8e", "1506439773649-6e0eb8cfb237"]),
            specifications: specs(
                "3-Seater: 200x85x90 cm, 1-Seater: 90x85x90 cm",
                "Burmese Teak Wood, Premium Fabric",
                "Natural Polish with PU Coating",
                "10 Years on Frame, 2 Years on Upholstery",
                "85 kg (total set)",
                "Pre-assembled, Ready to use",
            ),
            features: strings(&["Termite Resistant", "Stain-proof Fabric", "High-density Foam", "Removable Cushion Covers"]),
            in_stock: true,
            is_best_seller: true,
            is_new: false,
            rating: 4.8,
            review_count: 156,
        },
        Product {
            id: ProductId::new("2"),
            name: "Milano King Size Bed".into(),
            slug: Slug::new_unchecked("milano-king-size-bed"),
            category: "Bedroom".into(),
            category_slug: Slug::new_unchecked("bedroom"),
            price: Rupees(65000),
            original_price: Some(Rupees(78000)),
            description: "The Milano King Size Bed combines Italian design sensibilities with Indian craftsmanship. Featuring a stunning upholstered headboard and solid sheesham wood frame, this bed transforms your bedroom into a luxurious retreat. The hydraulic storage system provides ample space for bedding and seasonal items.".into(),
            short_description: "Italian-inspired king bed with hydraulic storage".into(),
            images: images(&["1505693416388-ac5ce068fe85", "1522771739844-6a9f6d5f14af", "1588046130717-0eb0c9a3ba15"]),
            specifications: specs(
                "198x183x120 cm (LxWxH)",
                "Sheesham Wood, Leatherette Upholstery",
                "Walnut Matte Finish",
                "8 Years Comprehensive",
                "120 kg",
                "Easy DIY Assembly (30 mins)",
            ),
            features: strings(&["Hydraulic Storage", "Orthopedic Support", "Anti-skid Base", "Soft-close Mechanism"]),
            in_stock: true,
            is_best_seller: true,
            is_new: false,
            rating: 4.9,
            review_count: 203,
        },
        Product {
            id: ProductId::new("3"),
            name: "Executive Office Desk".into(),
            slug: Slug::new_unchecked("executive-office-desk"),
            category: "Office".into(),
            category_slug: Slug::new_unchecked("office"),
            price: Rupees(42000),
            original_price: None,
            description: "Command your workspace with our Executive Office Desk. This L-shaped desk offers generous surface area for multiple monitors and documents. Built-in cable management keeps your setup clean, while the lockable drawers secure important files. Perfect for home offices and corporate settings.".into(),
            short_description: "L-shaped executive desk with cable management".into(),
            images: images(&["1518455027359-f3f8164ba6bd", "1593642632559-0c6d3fc62b89", "1611269154421-4e27233ac5c7"]),
            specifications: specs(
                "180x150x75 cm (L-shaped)",
                "Engineered Wood with Veneer",
                "Dark Oak Laminate",
                "5 Years",
                "65 kg",
                "Professional Assembly Included",
            ),
            features: strings(&["Cable Management System", "Lockable Drawers", "Keyboard Tray", "Modular Design"]),
            in_stock: true,
            is_best_seller: false,
            is_new: true,
            rating: 4.6,
            review_count: 89,
        },
        Product {
            id: ProductId::new("4"),
            name: "Heritage Dining Table Set".into(),
            slug: Slug::new_unchecked("heritage-dining-table-set"),
            category: "Dining".into(),
            category_slug: Slug::new_unchecked("dining"),
            price: Rupees(75000),
            original_price: Some(Rupees(92000)),
            description: "Gather your family around our Heritage Dining Table Set. This 8-seater set features a solid mango wood table with intricate inlay work and matching chairs with comfortable cushioned seats. The traditional design pays homage to Indian craftsmanship while fitting seamlessly into modern homes.".into(),
            short_description: "8-seater mango wood dining set with inlay work".into(),
            images: images(&["1617806118233-18e1de247200", "1595428774223-ef52624120d2", "1615066390971-03e4e1c36ddf"]),
            specifications: specs(
                "Table: 200x100x76 cm, Chair: 45x45x95 cm",
                "Solid Mango Wood",
                "Honey Oak with Brass Inlay",
                "10 Years",
                "150 kg (complete set)",
                "Pre-assembled",
            ),
            features: strings(&["Brass Inlay Work", "Cushioned Chairs", "Scratch Resistant Top", "Extendable Option Available"]),
            in_stock: true,
            is_best_seller: true,
            is_new: false,
            rating: 4.7,
            review_count: 134,
        },
        Product {
            id: ProductId::new("5"),
            name: "Modular Wardrobe System".into(),
            slug: Slug::new_unchecked("modular-wardrobe-system"),
            category: "Bedroom".into(),
            category_slug: Slug::new_unchecked("bedroom"),
            price: Rupees(55000),
            original_price: None,
            description: "Organize your life with our Modular Wardrobe System. This customizable 4-door wardrobe features adjustable shelves, dedicated shoe racks, tie holders, and a full-length mirror. The soft-close hinges and premium hardware ensure smooth operation for years to come.".into(),
            short_description: "4-door modular wardrobe with smart organization".into(),
            images: images(&["1595428774223-ef52624120d2", "1558997519-83ea9252edf8", "1597072689227-8882273e8f6a"]),
            specifications: specs(
                "240x60x210 cm",
                "PLPB with Laminate Finish",
                "Frosty White & Walnut Combo",
                "7 Years",
                "180 kg",
                "Professional Installation Included",
            ),
            features: strings(&["Soft-close Hinges", "LED Interior Lighting", "Full-length Mirror", "Adjustable Shelves"]),
            in_stock: true,
            is_best_seller: false,
            is_new: false,
            rating: 4.5,
            review_count: 98,
        },
        Product {
            id: ProductId::new("6"),
            name: "Ergonomic Office Chair".into(),
            slug: Slug::new_unchecked("ergonomic-office-chair"),
            category: "Office".into(),
            category_slug: Slug::new_unchecked("office"),
            price: Rupees(18500),
            original_price: Some(Rupees(24000)),
            description: "Work in comfort with our Ergonomic Office Chair. Designed with input from orthopedic specialists, this chair features adjustable lumbar support, 3D armrests, and a breathable mesh back. The synchronized tilt mechanism adapts to your movements throughout the day.".into(),
            short_description: "Premium ergonomic chair with lumbar support".into(),
            images: images(&["1580480055273-228ff5388ef8", "1589384267710-7a170981ca78", "1541558869434-2840d308329a"]),
            specifications: specs(
                "68x68x115-125 cm",
                "Mesh Back, Foam Seat, Nylon Base",
                "Black with Chrome Accents",
                "3 Years",
                "18 kg",
                "Easy DIY (15 mins)",
            ),
            features: strings(&["Adjustable Lumbar Support", "3D Armrests", "Synchronized Tilt", "Height Adjustable"]),
            in_stock: true,
            is_best_seller: true,
            is_new: true,
            rating: 4.8,
            review_count: 267,
        },
        Product {
            id: ProductId::new("7"),
            name: "Scandinavian Coffee Table".into(),
            slug: Slug::new_unchecked("scandinavian-coffee-table"),
            category: "Living Room".into(),
            category_slug: Slug::new_unchecked("living-room"),
            price: Rupees(15500),
            original_price: None,
            description: "Add Nordic charm to your living room with our Scandinavian Coffee Table. The minimalist design features clean lines, tapered legs, and a spacious lower shelf for magazines and decor. Crafted from solid rubber wood with a natural finish that highlights the wood grain.".into(),
            short_description: "Minimalist coffee table with lower shelf".into(),
            images: images(&["1532372320572-cda25653a26d", "1499933374294-4584851497cc", "1611269154421-4e27233ac5c7"]),
            specifications: specs(
                "120x60x45 cm",
                "Solid Rubber Wood",
                "Natural Oak",
                "5 Years",
                "22 kg",
                "Easy DIY (20 mins)",
            ),
            features: strings(&["Lower Storage Shelf", "Rounded Edges", "Anti-slip Pads", "Easy to Clean"]),
            in_stock: true,
            is_best_seller: false,
            is_new: false,
            rating: 4.6,
            review_count: 145,
        },
        Product {
            id: ProductId::new("8"),
            name: "Bookshelf with Study Unit".into(),
            slug: Slug::new_unchecked("bookshelf-study-unit"),
            category: "Storage".into(),
            category_slug: Slug::new_unchecked("storage"),
            price: Rupees(28000),
            original_price: None,
            description: "Maximize your space with our Bookshelf with Study Unit. This versatile piece combines a spacious bookshelf with an integrated study desk, perfect for students and home offices. The ladder-style design adds visual interest while providing easy access to all shelves.".into(),
            short_description: "Space-saving bookshelf with integrated desk".into(),
            images: images(&["1594620302200-9a762244a156", "1507003211169-0a1dd7228f2d", "1558997519-83ea9252edf8"]),
            specifications: specs(
                "150x50x180 cm",
                "Engineered Wood",
                "Columbia Walnut",
                "5 Years",
                "55 kg",
                "Professional Assembly Available",
            ),
            features: strings(&["Integrated Desk", "Cable Management", "Adjustable Shelves", "Wall Mounting Option"]),
            in_stock: true,
            is_best_seller: false,
            is_new: true,
            rating: 4.4,
            review_count: 76,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial("1", "Priya Sharma", "Mumbai, Maharashtra", 5,
            "Absolutely thrilled with my Royal Teak Sofa Set! The craftsmanship is exceptional and it has transformed our living room. The delivery team was professional and set everything up perfectly.",
            "Royal Teak Wood Sofa Set"),
        testimonial("2", "Rajesh Kumar", "Delhi NCR", 5,
            "We furnished our entire home with Sangam Furniture. From bedroom to dining, every piece exceeded our expectations. The quality-to-price ratio is unbeatable in the market.",
            "Complete Home Package"),
        testimonial("3", "Anita Desai", "Bangalore, Karnataka", 4,
            "The Milano bed is gorgeous and the hydraulic storage is a game-changer for our apartment. Minor delay in delivery but the product quality made up for it.",
            "Milano King Size Bed"),
        testimonial("4", "Vikram Patel", "Ahmedabad, Gujarat", 5,
            "As an interior designer, I recommend Sangam Furniture to all my clients. Their custom furniture service is outstanding - they brought my designs to life perfectly.",
            "Custom Furniture"),
        testimonial("5", "Meera Iyer", "Chennai, Tamil Nadu", 5,
            "The Heritage Dining Set is the centerpiece of our home. Every guest compliments the beautiful inlay work. Worth every rupee spent!",
            "Heritage Dining Table Set"),
        testimonial("6", "Arjun Reddy", "Hyderabad, Telangana", 4,
            "Great ergonomic chair for my home office. My back pain has reduced significantly since I started using it. Excellent build quality.",
            "Ergonomic Office Chair"),
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        faq("What is your delivery timeline?",
            "Standard delivery takes 7-14 business days depending on your location. Custom furniture orders may take 4-6 weeks. We provide real-time tracking for all orders."),
        faq("Do you offer installation services?",
            "Yes, we provide free professional installation for all furniture above ₹25,000. Our trained technicians will assemble and set up your furniture at your preferred time."),
        faq("What is your return policy?",
            "We offer a 7-day return policy for standard products in original condition. Custom-made furniture is non-returnable but covered under our comprehensive warranty."),
        faq("Can I customize furniture designs?",
            "Absolutely! Our custom design service allows you to modify dimensions, materials, finishes, and fabrics. Schedule a consultation with our design team to get started."),
        faq("What warranty do you provide?",
            "We offer up to 10 years warranty on solid wood frames and 2-5 years on upholstery and hardware depending on the product. Warranty covers manufacturing defects."),
        faq("Do you offer EMI options?",
            "Yes, we offer 0% EMI on orders above ₹30,000 with select credit cards. No-cost EMI options are available for 3, 6, and 12-month tenures."),
    ]
}

/// The full built-in document.
pub fn data() -> CatalogData {
    CatalogData {
        categories: categories(),
        products: products(),
        testimonials: testimonials(),
        faqs: faqs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Catalog, CatalogStore};

    #[test]
    fn built_in_data_passes_validation() {
        let catalog = Catalog::from_data(data()).unwrap();
        assert_eq!(catalog.products().len(), 8);
    }

    #[test]
    fn image_urls_carry_sizing_params() {
        for category in categories() {
            assert!(category.image.starts_with(IMG));
            assert!(category.image.ends_with(IMG_PARAMS));
        }
    }
}
