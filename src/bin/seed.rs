// src/bin/seed.rs
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::env;
use std::process;
use std::time::{Duration, Instant};

// --- Colores ANSI para la terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// --- Estructuras de Datos ---

struct DestinationSeed {
    name: &'static str,
    country: &'static str,
    description: &'static str,
    best_time_to_visit: &'static str,
    featured: bool,
}

struct CitySeed {
    destination: &'static str,
    name: &'static str,
    description: &'static str,
}

struct HotelSeed {
    city: &'static str,
    name: &'static str,
    star_rating: i32,
    address: &'static str,
    amenities: &'static [&'static str],
    images: &'static [&'static str],
}

struct TourSeed {
    name: &'static str,
    tour_type: &'static str,
    description: &'static str,
}

struct PackageSeed {
    destination: &'static str,
    name: &'static str,
    description: &'static str,
    duration_days: i32,
    duration_nights: i32,
    price: f64,
    featured: bool,
    tours: &'static [&'static str],
    cities: &'static [&'static str],
    snippets: &'static [&'static str],
    days: &'static [DaySeed],
}

struct DaySeed {
    day_number: i32,
    title: &'static str,
    details: &'static str,
}

struct ReviewSeed {
    package: &'static str,
    author_name: &'static str,
    rating: i32,
    title: &'static str,
    content: &'static str,
    approved: bool,
}

struct InquirySeed {
    package: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    message: &'static str,
    travel_date: &'static str,
    traveler_count: i32,
}

#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug)]
struct SeedTally {
    entity: &'static str,
    created: u32,
    skipped: u32,
    failed: u32,
}

// --- Datos de Ejemplo ---

fn destinations() -> Vec<DestinationSeed> {
    vec![
        DestinationSeed {
            name: "Rajasthan",
            country: "India",
            description: "Forts, palaces and desert towns across the land of kings.",
            best_time_to_visit: "October to March",
            featured: true,
        },
        DestinationSeed {
            name: "Kerala",
            country: "India",
            description: "Backwaters, tea hills and spice gardens on the Malabar coast.",
            best_time_to_visit: "September to March",
            featured: true,
        },
        DestinationSeed {
            name: "Bali",
            country: "Indonesia",
            description: "Rice terraces, temples and surf beaches in one compact island.",
            best_time_to_visit: "April to October",
            featured: false,
        },
    ]
}

fn cities() -> Vec<CitySeed> {
    vec![
        CitySeed { destination: "Rajasthan", name: "Jaipur", description: "The pink city, gateway to Rajasthan." },
        CitySeed { destination: "Rajasthan", name: "Udaipur", description: "Lake palaces and rooftop restaurants." },
        CitySeed { destination: "Rajasthan", name: "Jodhpur", description: "Blue houses under the Mehrangarh fort." },
        CitySeed { destination: "Kerala", name: "Kochi", description: "Colonial port town and arrival hub." },
        CitySeed { destination: "Kerala", name: "Alleppey", description: "Houseboat base for the backwaters." },
        CitySeed { destination: "Bali", name: "Ubud", description: "Cultural heart of the island." },
        CitySeed { destination: "Bali", name: "Seminyak", description: "Beach clubs and sunset bars." },
    ]
}

fn hotels() -> Vec<HotelSeed> {
    vec![
        HotelSeed {
            city: "Jaipur",
            name: "Amber Haveli",
            star_rating: 4,
            address: "12 Amer Road, Jaipur",
            amenities: &["wifi", "pool", "restaurant", "airport shuttle"],
            images: &[
                "https://images.example.com/hotels/amber-haveli-front.jpg",
                "https://images.example.com/hotels/amber-haveli-pool.jpg",
            ],
        },
        HotelSeed {
            city: "Udaipur",
            name: "Lake View Palace",
            star_rating: 5,
            address: "Pichola Lakeside, Udaipur",
            amenities: &["wifi", "spa", "rooftop restaurant"],
            images: &["https://images.example.com/hotels/lake-view-palace.jpg"],
        },
        HotelSeed {
            city: "Alleppey",
            name: "Backwater Retreat",
            star_rating: 3,
            address: "Punnamada Road, Alleppey",
            amenities: &["wifi", "garden", "canoe rental"],
            images: &["https://images.example.com/hotels/backwater-retreat.jpg"],
        },
        HotelSeed {
            city: "Ubud",
            name: "Rice Terrace Resort",
            star_rating: 4,
            address: "Jalan Raya Tegallalang, Ubud",
            amenities: &["wifi", "pool", "yoga pavilion", "restaurant"],
            images: &["https://images.example.com/hotels/rice-terrace-resort.jpg"],
        },
    ]
}

fn tours() -> Vec<TourSeed> {
    vec![
        TourSeed { name: "Old City Walking Tour", tour_type: "cultural", description: "Guided walk through bazaars and havelis." },
        TourSeed { name: "Thar Desert Safari", tour_type: "adventure", description: "Camel ride and overnight desert camp." },
        TourSeed { name: "Backwater Houseboat Cruise", tour_type: "nature", description: "Full day on a converted rice barge." },
        TourSeed { name: "Temple and Terrace Circuit", tour_type: "cultural", description: "Ubud temples with a rice terrace stop." },
    ]
}

fn snippets() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("inclusions", vec!["Daily breakfast", "Airport transfers", "English-speaking guide", "All entrance fees"]),
        ("exclusions", vec!["International flights", "Travel insurance", "Personal expenses"]),
        ("highlights", vec!["Sunset camel ride", "Private houseboat night", "Traditional dance performance", "Local cooking class"]),
    ]
}

fn packages() -> Vec<PackageSeed> {
    vec![
        PackageSeed {
            destination: "Rajasthan",
            name: "Royal Rajasthan Circuit",
            description: "Jaipur, Jodhpur and Udaipur with a desert night in between.",
            duration_days: 7,
            duration_nights: 6,
            price: 1299.0,
            featured: true,
            tours: &["Old City Walking Tour", "Thar Desert Safari"],
            cities: &["Jaipur", "Jodhpur", "Udaipur"],
            snippets: &["Daily breakfast", "Airport transfers", "International flights", "Sunset camel ride", "Traditional dance performance"],
            days: &[
                DaySeed { day_number: 1, title: "Arrival in Jaipur", details: "Airport pickup and rooftop dinner." },
                DaySeed { day_number: 2, title: "Amber Fort and City Palace", details: "Full day guided sightseeing." },
                DaySeed { day_number: 3, title: "Drive to Jodhpur", details: "Stop at stepwells along the way." },
            ],
        },
        PackageSeed {
            destination: "Kerala",
            name: "Kerala Backwaters Escape",
            description: "Kochi heritage, Alleppey houseboat and a spice garden day.",
            duration_days: 5,
            duration_nights: 4,
            price: 899.0,
            featured: true,
            tours: &["Backwater Houseboat Cruise"],
            cities: &["Kochi", "Alleppey"],
            snippets: &["Daily breakfast", "English-speaking guide", "Travel insurance", "Private houseboat night"],
            days: &[
                DaySeed { day_number: 1, title: "Arrival in Kochi", details: "Fort Kochi walk and kathakali show." },
                DaySeed { day_number: 2, title: "Houseboat boarding", details: "Cruise with onboard lunch and dinner." },
            ],
        },
        PackageSeed {
            destination: "Bali",
            name: "Bali Culture and Coast",
            description: "Ubud temples first, Seminyak beaches after.",
            duration_days: 6,
            duration_nights: 5,
            price: 1099.0,
            featured: false,
            tours: &["Temple and Terrace Circuit"],
            cities: &["Ubud", "Seminyak"],
            snippets: &["Airport transfers", "All entrance fees", "Personal expenses", "Local cooking class"],
            days: &[
                DaySeed { day_number: 1, title: "Arrival in Ubud", details: "Check in and monkey forest visit." },
                DaySeed { day_number: 2, title: "Temple circuit", details: "Tirta Empul and Gunung Kawi." },
            ],
        },
    ]
}

fn reviews() -> Vec<ReviewSeed> {
    vec![
        ReviewSeed {
            package: "Royal Rajasthan Circuit",
            author_name: "Elena Petrova",
            rating: 5,
            title: "Better than the brochure",
            content: "The desert camp night was the highlight of our year.",
            approved: true,
        },
        ReviewSeed {
            package: "Kerala Backwaters Escape",
            author_name: "Mark Whitfield",
            rating: 4,
            title: "Slow travel done right",
            content: "Houseboat crew cooked the best fish curry we had in India.",
            approved: true,
        },
        ReviewSeed {
            package: "Bali Culture and Coast",
            author_name: "Sofia Lindqvist",
            rating: 4,
            title: "Great guides",
            content: "Would have liked one more beach day, otherwise flawless.",
            approved: false,
        },
    ]
}

fn inquiries() -> Vec<InquirySeed> {
    vec![
        InquirySeed {
            package: "Royal Rajasthan Circuit",
            name: "James Okafor",
            email: "james.okafor@example.com",
            phone: "+44 7700 900123",
            message: "Is the desert camp suitable for a six year old?",
            travel_date: "2026-11-15",
            traveler_count: 3,
        },
        InquirySeed {
            package: "Kerala Backwaters Escape",
            name: "Anna Keller",
            email: "anna.keller@example.com",
            phone: "+49 151 23456789",
            message: "Can the houseboat menu be fully vegetarian?",
            travel_date: "2026-12-02",
            traveler_count: 2,
        },
    ]
}

// --- Manager Logic ---

struct CmsSeeder {
    base_url: String,
    admin_email: String,
    admin_password: String,
    client: Client,
    tallies: Vec<SeedTally>,
}

impl CmsSeeder {
    fn new(base_url: String, admin_email: String, admin_password: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            admin_email,
            admin_password,
            client,
            tallies: Vec::new(),
        }
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Log in through the admin form so the cookie store picks up the session.
    async fn login(&self) -> Result<(), String> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .form(&[
                ("email", self.admin_email.as_str()),
                ("password", self.admin_password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("login rejected with HTTP {}", response.status()))
        }
    }

    /// POST a JSON payload to an admin endpoint and return the created record id.
    /// A conflict on a unique column is reported as `Ok(None)` so re-runs keep going.
    async fn create(&self, path: &str, payload: Value) -> Result<Option<String>, String> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status == reqwest::StatusCode::CONFLICT {
            return Ok(None);
        }

        let envelope = response
            .json::<Envelope>()
            .await
            .map_err(|e| format!("failed to parse response JSON: {}", e))?;

        if !status.is_success() || !envelope.success {
            return Err(envelope
                .error
                .unwrap_or_else(|| format!("HTTP {}", status)));
        }

        let id = envelope
            .data
            .as_ref()
            .and_then(|data| data.get("id"))
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| "response had no id field".to_string())?;
        Ok(Some(id))
    }

    fn tally(&mut self, entity: &'static str) -> &mut SeedTally {
        if !self.tallies.iter().any(|t| t.entity == entity) {
            self.tallies.push(SeedTally { entity, created: 0, skipped: 0, failed: 0 });
        }
        self.tallies.iter_mut().find(|t| t.entity == entity).unwrap()
    }

    /// Create one record, print the outcome and keep the per-entity tally current.
    async fn seed_one(
        &mut self,
        entity: &'static str,
        label: &str,
        path: &str,
        payload: Value,
    ) -> Option<String> {
        match self.create(path, payload).await {
            Ok(Some(id)) => {
                println!("{}  ✅ {} '{}'{}", GREEN, entity, label, RESET);
                self.tally(entity).created += 1;
                Some(id)
            }
            Ok(None) => {
                println!("{}  ⏭️  {} '{}' already exists{}", YELLOW, entity, label, RESET);
                self.tally(entity).skipped += 1;
                None
            }
            Err(err) => {
                println!("{}  ❌ {} '{}': {}{}", RED, entity, label, err, RESET);
                self.tally(entity).failed += 1;
                None
            }
        }
    }

    async fn run(&mut self) {
        let started = Instant::now();

        println!("\n{}🔍 Checking service status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}❌ Service unavailable.{}", RED, RESET);
            println!("{}Please ensure meridian-cms is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}✅ Service available{}", GREEN, RESET);

        println!("\n{}🔐 Logging in as {}...{}", CYAN, self.admin_email, RESET);
        if let Err(err) = self.login().await {
            println!("{}❌ Login failed: {}{}", RED, err, RESET);
            process::exit(1);
        }
        println!("{}✅ Session established{}", GREEN, RESET);

        self.print_header();

        // Parents before children: ids from each stage feed the next one.
        let mut destination_ids: HashMap<&'static str, String> = HashMap::new();
        let mut city_ids: HashMap<&'static str, String> = HashMap::new();
        let mut tour_ids: HashMap<&'static str, String> = HashMap::new();
        let mut snippet_ids: HashMap<&'static str, String> = HashMap::new();
        let mut package_ids: HashMap<&'static str, String> = HashMap::new();

        println!("\n{}🗺️  Destinations{}", BOLD, RESET);
        for seed in destinations() {
            let payload = json!({
                "name": seed.name,
                "country": seed.country,
                "description": seed.description,
                "best_time_to_visit": seed.best_time_to_visit,
                "is_featured": seed.featured,
            });
            if let Some(id) = self.seed_one("destination", seed.name, "/api/destinations", payload).await {
                destination_ids.insert(seed.name, id);
            }
        }

        println!("\n{}🏙️  Cities{}", BOLD, RESET);
        for seed in cities() {
            let Some(destination_id) = destination_ids.get(seed.destination) else {
                println!("{}  ⏭️  city '{}' skipped, destination '{}' was not created{}", YELLOW, seed.name, seed.destination, RESET);
                self.tally("city").skipped += 1;
                continue;
            };
            let payload = json!({
                "destination_id": destination_id,
                "name": seed.name,
                "description": seed.description,
            });
            if let Some(id) = self.seed_one("city", seed.name, "/api/cities", payload).await {
                city_ids.insert(seed.name, id);
            }
        }

        println!("\n{}🚌 Tours{}", BOLD, RESET);
        for seed in tours() {
            let payload = json!({
                "name": seed.name,
                "tour_type": seed.tour_type,
                "description": seed.description,
            });
            if let Some(id) = self.seed_one("tour", seed.name, "/api/tours", payload).await {
                tour_ids.insert(seed.name, id);
            }
        }

        println!("\n{}📝 Snippets{}", BOLD, RESET);
        for (collection, labels) in snippets() {
            let path = format!("/api/{}", collection);
            for label in labels {
                let payload = json!({ "label": label });
                if let Some(id) = self.seed_one("snippet", label, &path, payload).await {
                    snippet_ids.insert(label, id);
                }
            }
        }

        println!("\n{}🏨 Hotels{}", BOLD, RESET);
        for seed in hotels() {
            let Some(city_id) = city_ids.get(seed.city) else {
                println!("{}  ⏭️  hotel '{}' skipped, city '{}' was not created{}", YELLOW, seed.name, seed.city, RESET);
                self.tally("hotel").skipped += 1;
                continue;
            };
            let payload = json!({
                "city_id": city_id,
                "name": seed.name,
                "star_rating": seed.star_rating,
                "address": seed.address,
                "amenities": seed.amenities,
            });
            let Some(hotel_id) = self.seed_one("hotel", seed.name, "/api/hotels", payload).await else {
                continue;
            };
            for (position, image_url) in seed.images.iter().enumerate() {
                let payload = json!({
                    "hotel_id": hotel_id,
                    "image_url": image_url,
                    "alt_text": format!("{} photo {}", seed.name, position + 1),
                    "is_primary": position == 0,
                    "display_order": position as i32,
                });
                self.seed_one("hotel image", image_url, "/api/hotel-images", payload).await;
            }
        }

        println!("\n{}📦 Packages{}", BOLD, RESET);
        for seed in packages() {
            let Some(destination_id) = destination_ids.get(seed.destination) else {
                println!("{}  ⏭️  package '{}' skipped, destination '{}' was not created{}", YELLOW, seed.name, seed.destination, RESET);
                self.tally("package").skipped += 1;
                continue;
            };
            let linked_tours: Vec<&String> = seed.tours.iter().filter_map(|name| tour_ids.get(name)).collect();
            let linked_cities: Vec<&String> = seed.cities.iter().filter_map(|name| city_ids.get(name)).collect();
            let linked_snippets: Vec<&String> = seed.snippets.iter().filter_map(|label| snippet_ids.get(label)).collect();
            let payload = json!({
                "destination_id": destination_id,
                "name": seed.name,
                "description": seed.description,
                "duration_days": seed.duration_days,
                "duration_nights": seed.duration_nights,
                "price": seed.price,
                "is_featured": seed.featured,
                "tour_ids": linked_tours,
                "city_ids": linked_cities,
                "snippet_ids": linked_snippets,
            });
            let Some(package_id) = self.seed_one("package", seed.name, "/api/packages", payload).await else {
                continue;
            };
            package_ids.insert(seed.name, package_id.clone());

            for day in seed.days {
                let payload = json!({
                    "package_id": package_id,
                    "day_number": day.day_number,
                    "title": day.title,
                    "details": day.details,
                    "day_plan": {
                        "highlights": [day.title],
                        "inclusions": ["Breakfast"],
                        "exclusions": [],
                    },
                });
                let label = format!("day {} of {}", day.day_number, seed.name);
                self.seed_one("itinerary day", &label, "/api/itineraries", payload).await;
            }
        }

        println!("\n{}⭐ Reviews{}", BOLD, RESET);
        for seed in reviews() {
            let Some(package_id) = package_ids.get(seed.package) else {
                println!("{}  ⏭️  review by '{}' skipped, package '{}' was not created{}", YELLOW, seed.author_name, seed.package, RESET);
                self.tally("review").skipped += 1;
                continue;
            };
            let payload = json!({
                "package_id": package_id,
                "author_name": seed.author_name,
                "rating": seed.rating,
                "title": seed.title,
                "content": seed.content,
                "is_approved": seed.approved,
            });
            self.seed_one("review", seed.author_name, "/api/reviews", payload).await;
        }

        println!("\n{}📨 Inquiries{}", BOLD, RESET);
        for seed in inquiries() {
            let Some(package_id) = package_ids.get(seed.package) else {
                println!("{}  ⏭️  inquiry from '{}' skipped, package '{}' was not created{}", YELLOW, seed.name, seed.package, RESET);
                self.tally("inquiry").skipped += 1;
                continue;
            };
            let payload = json!({
                "package_id": package_id,
                "name": seed.name,
                "email": seed.email,
                "phone": seed.phone,
                "message": seed.message,
                "travel_date": seed.travel_date,
                "traveler_count": seed.traveler_count,
            });
            self.seed_one("inquiry", seed.name, "/api/inquiries", payload).await;
        }

        self.print_summary(started.elapsed().as_secs_f64());
    }

    fn print_header(&self) {
        println!("\n{}╔══════════════════════════════════════════════════════════════╗{}", CYAN, RESET);
        println!("{}║   🧳 Meridian CMS - Sample Catalog Seeder                    ║{}", CYAN, RESET);
        println!("{}╚══════════════════════════════════════════════════════════════╝{}", CYAN, RESET);
    }

    fn print_summary(&self, duration_secs: f64) {
        println!("\n\n{}📋 Seeding Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────");
        println!("{:<20} {:>8} {:>8} {:>8}", "Entity", "Created", "Skipped", "Failed");
        println!("──────────────────────────────────────────────────");

        let mut total_created = 0;
        let mut total_failed = 0;
        for tally in &self.tallies {
            println!(
                "{:<20} {:>8} {:>8} {:>8}",
                tally.entity, tally.created, tally.skipped, tally.failed
            );
            total_created += tally.created;
            total_failed += tally.failed;
        }

        println!("──────────────────────────────────────────────────");
        if total_failed == 0 {
            println!("\n{}✨ Process Completed Successfully{}", GREEN, RESET);
        } else {
            println!("\n{}⚠️  Completed with {} failures{}", YELLOW, total_failed, RESET);
        }
        println!("{}📊 Totals:{}", BOLD, RESET);
        println!("  • Records created: {}{}{}", GREEN, total_created, RESET);
        println!("  • Total Duration: {:.1}s", duration_secs);
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let base_url = env::var("CMS_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let admin_email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@meridian.travel".to_string());
    let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());

    let mut seeder = CmsSeeder::new(base_url, admin_email, admin_password);
    seeder.run().await;
}
