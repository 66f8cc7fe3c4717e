//! Seed the services collection with the sample website-template offerings.
//!
//! Idempotent: offerings whose title already exists in the catalog are
//! skipped, so the seed can be re-run safely.
//!
//! Run with: cargo run --bin seed

use anyhow::Result;
use sitekit_catalog::models::CreateServiceRequest;
use sitekit_catalog::services::CatalogService;
use sitekit_catalog::MongoDb;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,sitekit_catalog=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("MONGODB_URI"))
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let database_name = std::env::var("DATABASE_NAME")
        .or_else(|_| std::env::var("DB_NAME"))
        .unwrap_or_else(|_| "sitekit".to_string());

    let db = MongoDb::connect(&database_url, &database_name).await?;
    let catalog = CatalogService::new(db);

    let existing: Vec<String> = catalog
        .list(1000)
        .await?
        .into_iter()
        .map(|s| s.title)
        .collect();

    let mut created = 0;
    let mut skipped = 0;
    for offering in sample_offerings() {
        let title = offering.title.clone().unwrap_or_default();
        if existing.iter().any(|t| t == &title) {
            info!("Skipping existing service: {}", title);
            skipped += 1;
            continue;
        }
        let service = catalog.create(offering).await?;
        info!("Seeded service {} ({})", service.id, service.title);
        created += 1;
    }

    info!("Seeding complete: {} created, {} skipped", created, skipped);
    Ok(())
}

struct Offering {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    image: &'static str,
    link: &'static str,
    link_text: &'static str,
    features: &'static [&'static str],
    price: &'static str,
    order: i32,
}

impl From<Offering> for CreateServiceRequest {
    fn from(o: Offering) -> Self {
        CreateServiceRequest {
            title: Some(o.title.to_string()),
            description: Some(o.description.to_string()),
            icon: Some(o.icon.to_string()),
            image: Some(o.image.to_string()),
            images: None,
            link: Some(o.link.to_string()),
            link_text: Some(o.link_text.to_string()),
            features: Some(o.features.iter().map(|f| f.to_string()).collect()),
            price: Some(o.price.to_string()),
            active: Some(true),
            order: Some(o.order),
        }
    }
}

fn sample_offerings() -> Vec<CreateServiceRequest> {
    vec![
        Offering {
            title: "Engagement / Proposal Website",
            description: "Beautiful, romantic websites perfect for proposals and engagement \
                          announcements. Share your love story with stunning visuals and \
                          interactive elements.",
            icon: "Heart",
            image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&q=80",
            link: "https://engagement-proposal-website.netlify.app/",
            link_text: "View Live Demo",
            features: &[
                "Romantic design with stunning visuals",
                "Love story timeline section",
                "Photo gallery with lightbox",
                "Interactive proposal reveal",
                "Mobile-responsive design",
                "24-hour activation",
            ],
            price: "₹2,999",
            order: 1,
        }
        .into(),
        Offering {
            title: "Wedding Invitation Website",
            description: "Elegant wedding invitation website to share your big day details with \
                          family and friends. Include venue, schedule, RSVP form, and photo \
                          gallery all in one beautiful place.",
            icon: "Heart",
            image: "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=800&q=80",
            link: "https://wedding-demo.netlify.app/",
            link_text: "View Demo",
            features: &[
                "Beautiful wedding theme design",
                "Event schedule & venue details",
                "Online RSVP form",
                "Photo gallery",
                "Gift registry links",
                "Google Maps integration",
            ],
            price: "₹3,499",
            order: 2,
        }
        .into(),
        Offering {
            title: "Birthday Party Website",
            description: "Fun and colorful birthday party invitation website. Perfect for kids' \
                          birthdays, milestone celebrations, or surprise parties. Share all \
                          party details in style!",
            icon: "Cake",
            image: "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=800&q=80",
            link: "https://birthday-party-demo.netlify.app/",
            link_text: "View Demo",
            features: &[
                "Colorful party theme",
                "Event countdown timer",
                "RSVP form",
                "Party games & activities info",
                "Gift wishlist",
                "Location & directions",
            ],
            price: "₹1,999",
            order: 3,
        }
        .into(),
        Offering {
            title: "Baby Shower Website",
            description: "Sweet and adorable baby shower invitation website. Share the joy of \
                          your upcoming arrival with beautiful designs, gift registries, and \
                          celebration details.",
            icon: "Baby",
            image: "https://images.unsplash.com/photo-1515488042361-ee00e0ddd4e4?w=800&q=80",
            link: "https://babyshower-demo.netlify.app/",
            link_text: "View Demo",
            features: &[
                "Cute baby-themed design",
                "Gender reveal section",
                "Baby registry links",
                "RSVP form",
                "Photo gallery",
                "Games & activities page",
            ],
            price: "₹2,499",
            order: 4,
        }
        .into(),
        Offering {
            title: "Corporate Event Website",
            description: "Professional corporate event website for conferences, seminars, \
                          product launches, and company celebrations. Includes agenda, speaker \
                          profiles, and registration.",
            icon: "Building",
            image: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?w=800&q=80",
            link: "https://corporate-event-demo.netlify.app/",
            link_text: "View Demo",
            features: &[
                "Professional business design",
                "Event schedule & agenda",
                "Speaker profiles",
                "Online registration form",
                "Venue information",
                "Sponsor showcase",
            ],
            price: "₹4,999",
            order: 6,
        }
        .into(),
        Offering {
            title: "Charity/Fundraiser Website",
            description: "Make a difference with a charity event website. Share your cause, \
                          collect donations, and organize fundraising events with a \
                          professional platform.",
            icon: "Heart",
            image: "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=800&q=80",
            link: "https://charity-demo.netlify.app/",
            link_text: "View Demo",
            features: &[
                "Charity-focused design",
                "Cause & mission statement",
                "Donation integration",
                "Event details",
                "Impact stories",
                "Volunteer registration",
            ],
            price: "₹3,999",
            order: 10,
        }
        .into(),
    ]
}
