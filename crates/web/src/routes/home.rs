//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

// =============================================================================
// Static Content
// =============================================================================

/// A service tier shown in the pricing section.
#[derive(Debug, Clone)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted as "Most Popular".
    pub popular: bool,
}

/// A selling point shown in the features section.
#[derive(Debug, Clone)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A line in the contact card.
#[derive(Debug, Clone)]
pub struct ContactLine {
    pub label: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Wash Only",
        price: "$3",
        unit: "per kg",
        description: "Basic washing service for everyday clothes",
        features: &[
            "Machine wash",
            "Fabric softener included",
            "48-hour turnaround",
            "Quality inspection",
        ],
        popular: false,
    },
    PricingPlan {
        name: "Wash & Iron",
        price: "$5",
        unit: "per kg",
        description: "Complete service for professional look",
        features: &[
            "Machine wash",
            "Professional ironing",
            "Fabric softener included",
            "24-hour turnaround",
            "Folded & packaged",
        ],
        popular: true,
    },
    PricingPlan {
        name: "Dry Clean",
        price: "$8",
        unit: "per item",
        description: "Premium care for delicate garments",
        features: &[
            "Eco-friendly solvents",
            "Stain treatment",
            "Professional pressing",
            "Garment covers",
            "Same-day available",
        ],
        popular: false,
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Quality Care",
        description: "We treat every garment with the utmost care using premium detergents and techniques.",
    },
    Feature {
        title: "Fast Turnaround",
        description: "Get your clothes back fresh and clean within 24-48 hours, or same-day for urgent needs.",
    },
    Feature {
        title: "Free Pickup & Delivery",
        description: "We pick up and deliver to your doorstep at no extra cost for orders over $30.",
    },
    Feature {
        title: "Satisfaction Guaranteed",
        description: "Not happy with the results? We'll re-clean your items for free, no questions asked.",
    },
];

pub const CONTACT_LINES: &[ContactLine] = &[
    ContactLine {
        label: "Phone",
        primary: "+1 (555) 123-4567",
        secondary: "Mon-Sat, 8am-8pm",
    },
    ContactLine {
        label: "Email",
        primary: "hello@freshwash.com",
        secondary: "We reply within 24 hours",
    },
    ContactLine {
        label: "Location",
        primary: "123 Clean Street",
        secondary: "New York, NY 10001",
    },
];

// =============================================================================
// Handler
// =============================================================================

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current_path: &'static str,
    pub plans: &'static [PricingPlan],
    pub features: &'static [Feature],
    pub contact_lines: &'static [ContactLine],
}

/// Display the landing page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        current_path: "/",
        plans: PRICING_PLANS,
        features: FEATURES,
        contact_lines: CONTACT_LINES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Wash & Iron");
    }

    #[test]
    fn test_home_template_renders_sections() {
        let html = HomeTemplate {
            current_path: "/",
            plans: PRICING_PLANS,
            features: FEATURES,
            contact_lines: CONTACT_LINES,
        }
        .render()
        .unwrap_or_default();

        assert!(html.contains("Fresh Laundry"));
        assert!(html.contains("Most Popular"));
        assert!(html.contains("Satisfaction Guaranteed"));
        assert!(html.contains("hello@freshwash.com"));
        assert!(html.contains("href=\"/create\""));
    }
}
