// src/handlers/pages.rs
// DOCUMENTATION: Server-rendered admin pages
// PURPOSE: Dashboard, list pages and create/edit forms. The forms submit
// JSON to the REST endpoints, which stay the single write path

use std::collections::{HashMap, HashSet};

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse, Responder};
use askama::Template;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{
    self, CityRepository, DestinationRepository, HotelImageRepository, HotelRepository,
    InquiryRepository, ItineraryRepository, PackageRepository, ReviewRepository,
    SnippetRepository, TourRepository,
};
use crate::errors::CmsError;
use crate::models::{InquiryStatus, ListQuery, SnippetKind};

/// Rows fetched for the admin list pages
const PAGE_ROWS: i64 = 100;

fn page_query() -> ListQuery {
    ListQuery {
        limit: Some(PAGE_ROWS),
        ..Default::default()
    }
}

fn html<T: Template>(page: T) -> Result<HttpResponse, CmsError> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.render()?))
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn status_str(status: InquiryStatus) -> &'static str {
    match status {
        InquiryStatus::New => "new",
        InquiryStatus::Contacted => "contacted",
        InquiryStatus::Closed => "closed",
    }
}

/// Entry rendered into a <select> element
struct SelectOption {
    id: String,
    label: String,
    selected: bool,
}

async fn destination_options(
    pool: &PgPool,
    selected: Option<Uuid>,
) -> Result<Vec<SelectOption>, CmsError> {
    let (destinations, _) = DestinationRepository::list(pool, &page_query()).await?;

    Ok(destinations
        .into_iter()
        .map(|d| SelectOption {
            id: d.id.to_string(),
            label: d.name,
            selected: selected == Some(d.id),
        })
        .collect())
}

async fn city_options(
    pool: &PgPool,
    selected: &HashSet<Uuid>,
) -> Result<Vec<SelectOption>, CmsError> {
    let (cities, _) = CityRepository::list(pool, &page_query()).await?;

    Ok(cities
        .into_iter()
        .map(|c| SelectOption {
            id: c.id.to_string(),
            label: c.name,
            selected: selected.contains(&c.id),
        })
        .collect())
}

async fn tour_options(
    pool: &PgPool,
    selected: &HashSet<Uuid>,
) -> Result<Vec<SelectOption>, CmsError> {
    let (tours, _) = TourRepository::list(pool, &page_query()).await?;

    Ok(tours
        .into_iter()
        .map(|t| SelectOption {
            id: t.id.to_string(),
            label: t.name,
            selected: selected.contains(&t.id),
        })
        .collect())
}

async fn snippet_options(
    pool: &PgPool,
    selected: &HashSet<Uuid>,
) -> Result<(Vec<SelectOption>, Vec<SelectOption>, Vec<SelectOption>), CmsError> {
    let mut inclusions = Vec::new();
    let mut exclusions = Vec::new();
    let mut highlights = Vec::new();

    for kind in [
        SnippetKind::Inclusion,
        SnippetKind::Exclusion,
        SnippetKind::Highlight,
    ] {
        let (snippets, _) = SnippetRepository::list(pool, kind, &page_query()).await?;
        let options: Vec<SelectOption> = snippets
            .into_iter()
            .map(|s| SelectOption {
                id: s.id.to_string(),
                label: s.label,
                selected: selected.contains(&s.id),
            })
            .collect();

        match kind {
            SnippetKind::Inclusion => inclusions = options,
            SnippetKind::Exclusion => exclusions = options,
            SnippetKind::Highlight => highlights = options,
        }
    }

    Ok((inclusions, exclusions, highlights))
}

/// GET /
/// The middleware bounces unauthenticated visitors to /login from /admin
pub async fn root_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/admin"))
        .finish()
}

// ---------------------------------------------------------------------------
// Dashboard

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage {
    destinations: i64,
    cities: i64,
    hotels: i64,
    packages: i64,
    tours: i64,
    reviews: i64,
    inquiries: i64,
    new_inquiries: i64,
}

/// GET /admin
pub async fn dashboard(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let counts = db::stats::dashboard_counts(pool.get_ref()).await?;

    html(DashboardPage {
        destinations: counts.destinations,
        cities: counts.cities,
        hotels: counts.hotels,
        packages: counts.packages,
        tours: counts.tours,
        reviews: counts.reviews,
        inquiries: counts.inquiries,
        new_inquiries: counts.new_inquiries,
    })
}

// ---------------------------------------------------------------------------
// Destinations

struct DestinationRow {
    id: String,
    name: String,
    country: String,
    is_featured: bool,
    created: String,
}

#[derive(Template)]
#[template(path = "destinations.html")]
struct DestinationListPage {
    rows: Vec<DestinationRow>,
}

/// GET /admin/destinations
pub async fn destinations_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (destinations, _) = DestinationRepository::list(pool.get_ref(), &page_query()).await?;

    let rows = destinations
        .into_iter()
        .map(|d| DestinationRow {
            id: d.id.to_string(),
            name: d.name,
            country: d.country,
            is_featured: d.is_featured,
            created: d.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    html(DestinationListPage { rows })
}

#[derive(Template)]
#[template(path = "destination_form.html")]
struct DestinationFormPage {
    heading: String,
    submit_method: String,
    submit_url: String,
    name: String,
    country: String,
    description: String,
    best_time_to_visit: String,
    image_url: String,
    is_featured: bool,
}

/// GET /admin/destinations/new
pub async fn destination_new_page() -> Result<impl Responder, CmsError> {
    html(DestinationFormPage {
        heading: "New Destination".to_string(),
        submit_method: "POST".to_string(),
        submit_url: "/api/destinations".to_string(),
        name: String::new(),
        country: String::new(),
        description: String::new(),
        best_time_to_visit: String::new(),
        image_url: String::new(),
        is_featured: false,
    })
}

/// GET /admin/destinations/{id}/edit
pub async fn destination_edit_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let d = DestinationRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;

    html(DestinationFormPage {
        heading: format!("Edit {}", d.name),
        submit_method: "PUT".to_string(),
        submit_url: format!("/api/destinations/{}", d.id),
        name: d.name,
        country: d.country,
        description: text(&d.description),
        best_time_to_visit: text(&d.best_time_to_visit),
        image_url: text(&d.image_url),
        is_featured: d.is_featured,
    })
}

// ---------------------------------------------------------------------------
// Cities

struct CityRow {
    id: String,
    name: String,
    destination: String,
    created: String,
}

#[derive(Template)]
#[template(path = "cities.html")]
struct CityListPage {
    rows: Vec<CityRow>,
}

/// GET /admin/cities
pub async fn cities_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (cities, _) = CityRepository::list(pool.get_ref(), &page_query()).await?;
    let (destinations, _) = DestinationRepository::list(pool.get_ref(), &page_query()).await?;
    let names: HashMap<Uuid, String> =
        destinations.into_iter().map(|d| (d.id, d.name)).collect();

    let rows = cities
        .into_iter()
        .map(|c| CityRow {
            id: c.id.to_string(),
            name: c.name,
            destination: names.get(&c.destination_id).cloned().unwrap_or_default(),
            created: c.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    html(CityListPage { rows })
}

#[derive(Template)]
#[template(path = "city_form.html")]
struct CityFormPage {
    heading: String,
    submit_method: String,
    submit_url: String,
    destinations: Vec<SelectOption>,
    name: String,
    description: String,
    image_url: String,
}

/// GET /admin/cities/new
pub async fn city_new_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    html(CityFormPage {
        heading: "New City".to_string(),
        submit_method: "POST".to_string(),
        submit_url: "/api/cities".to_string(),
        destinations: destination_options(pool.get_ref(), None).await?,
        name: String::new(),
        description: String::new(),
        image_url: String::new(),
    })
}

/// GET /admin/cities/{id}/edit
pub async fn city_edit_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let c = CityRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;

    html(CityFormPage {
        heading: format!("Edit {}", c.name),
        submit_method: "PUT".to_string(),
        submit_url: format!("/api/cities/{}", c.id),
        destinations: destination_options(pool.get_ref(), Some(c.destination_id)).await?,
        name: c.name,
        description: text(&c.description),
        image_url: text(&c.image_url),
    })
}

// ---------------------------------------------------------------------------
// Hotels

struct HotelRow {
    id: String,
    name: String,
    city: String,
    star_rating: i32,
}

#[derive(Template)]
#[template(path = "hotels.html")]
struct HotelListPage {
    rows: Vec<HotelRow>,
}

/// GET /admin/hotels
pub async fn hotels_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (hotels, _) = HotelRepository::list(pool.get_ref(), &page_query()).await?;
    let (cities, _) = CityRepository::list(pool.get_ref(), &page_query()).await?;
    let names: HashMap<Uuid, String> = cities.into_iter().map(|c| (c.id, c.name)).collect();

    let rows = hotels
        .into_iter()
        .map(|h| HotelRow {
            id: h.id.to_string(),
            name: h.name,
            city: names.get(&h.city_id).cloned().unwrap_or_default(),
            star_rating: h.star_rating,
        })
        .collect();

    html(HotelListPage { rows })
}

#[derive(Template)]
#[template(path = "hotel_form.html")]
struct HotelFormPage {
    heading: String,
    submit_method: String,
    submit_url: String,
    cities: Vec<SelectOption>,
    name: String,
    description: String,
    star_rating: String,
    address: String,
    amenities: String,
}

/// GET /admin/hotels/new
pub async fn hotel_new_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    html(HotelFormPage {
        heading: "New Hotel".to_string(),
        submit_method: "POST".to_string(),
        submit_url: "/api/hotels".to_string(),
        cities: city_options(pool.get_ref(), &HashSet::new()).await?,
        name: String::new(),
        description: String::new(),
        star_rating: String::new(),
        address: String::new(),
        amenities: String::new(),
    })
}

/// GET /admin/hotels/{id}/edit
pub async fn hotel_edit_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let h = HotelRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    let selected: HashSet<Uuid> = [h.city_id].into_iter().collect();

    html(HotelFormPage {
        heading: format!("Edit {}", h.name),
        submit_method: "PUT".to_string(),
        submit_url: format!("/api/hotels/{}", h.id),
        cities: city_options(pool.get_ref(), &selected).await?,
        name: h.name,
        description: text(&h.description),
        star_rating: h.star_rating.to_string(),
        address: text(&h.address),
        amenities: h.amenities.unwrap_or_default().join(", "),
    })
}

struct ImageRow {
    id: String,
    image_url: String,
    alt_text: String,
    is_primary: bool,
    display_order: i32,
}

#[derive(Template)]
#[template(path = "hotel_images.html")]
struct HotelImagesPage {
    hotel_id: String,
    hotel_name: String,
    rows: Vec<ImageRow>,
}

/// GET /admin/hotels/{id}/images
pub async fn hotel_images_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let hotel = HotelRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    let images = HotelImageRepository::list_by_hotel(pool.get_ref(), hotel.id).await?;

    let rows = images
        .into_iter()
        .map(|img| ImageRow {
            id: img.id.to_string(),
            image_url: img.image_url,
            alt_text: text(&img.alt_text),
            is_primary: img.is_primary,
            display_order: img.display_order,
        })
        .collect();

    html(HotelImagesPage {
        hotel_id: hotel.id.to_string(),
        hotel_name: hotel.name,
        rows,
    })
}

// ---------------------------------------------------------------------------
// Packages

struct PackageRow {
    id: String,
    name: String,
    destination: String,
    duration: String,
    price: String,
    is_featured: bool,
}

#[derive(Template)]
#[template(path = "packages.html")]
struct PackageListPage {
    rows: Vec<PackageRow>,
}

/// GET /admin/packages
pub async fn packages_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (packages, _) = PackageRepository::list(pool.get_ref(), &page_query()).await?;
    let (destinations, _) = DestinationRepository::list(pool.get_ref(), &page_query()).await?;
    let names: HashMap<Uuid, String> =
        destinations.into_iter().map(|d| (d.id, d.name)).collect();

    let rows = packages
        .into_iter()
        .map(|p| PackageRow {
            id: p.id.to_string(),
            name: p.name,
            destination: names.get(&p.destination_id).cloned().unwrap_or_default(),
            duration: format!("{}d / {}n", p.duration_days, p.duration_nights),
            price: format!("{:.2}", p.price),
            is_featured: p.is_featured,
        })
        .collect();

    html(PackageListPage { rows })
}

#[derive(Template)]
#[template(path = "package_form.html")]
struct PackageFormPage {
    heading: String,
    submit_method: String,
    submit_url: String,
    destinations: Vec<SelectOption>,
    name: String,
    description: String,
    duration_days: String,
    duration_nights: String,
    price: String,
    image_url: String,
    is_featured: bool,
    tours: Vec<SelectOption>,
    cities: Vec<SelectOption>,
    inclusions: Vec<SelectOption>,
    exclusions: Vec<SelectOption>,
    highlights: Vec<SelectOption>,
}

/// GET /admin/packages/new
pub async fn package_new_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let none = HashSet::new();
    let (inclusions, exclusions, highlights) = snippet_options(pool.get_ref(), &none).await?;

    html(PackageFormPage {
        heading: "New Package".to_string(),
        submit_method: "POST".to_string(),
        submit_url: "/api/packages".to_string(),
        destinations: destination_options(pool.get_ref(), None).await?,
        name: String::new(),
        description: String::new(),
        duration_days: String::new(),
        duration_nights: String::new(),
        price: String::new(),
        image_url: String::new(),
        is_featured: false,
        tours: tour_options(pool.get_ref(), &none).await?,
        cities: city_options(pool.get_ref(), &none).await?,
        inclusions,
        exclusions,
        highlights,
    })
}

/// GET /admin/packages/{id}/edit
pub async fn package_edit_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let p = PackageRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;

    let tour_ids: HashSet<Uuid> = TourRepository::list_by_package(pool.get_ref(), p.id)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();
    let city_ids: HashSet<Uuid> = CityRepository::list_by_package(pool.get_ref(), p.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    let snippet_ids: HashSet<Uuid> = SnippetRepository::list_by_package(pool.get_ref(), p.id)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    let (inclusions, exclusions, highlights) =
        snippet_options(pool.get_ref(), &snippet_ids).await?;

    html(PackageFormPage {
        heading: format!("Edit {}", p.name),
        submit_method: "PUT".to_string(),
        submit_url: format!("/api/packages/{}", p.id),
        destinations: destination_options(pool.get_ref(), Some(p.destination_id)).await?,
        name: p.name,
        description: text(&p.description),
        duration_days: p.duration_days.to_string(),
        duration_nights: p.duration_nights.to_string(),
        price: format!("{}", p.price),
        image_url: text(&p.image_url),
        is_featured: p.is_featured,
        tours: tour_options(pool.get_ref(), &tour_ids).await?,
        cities: city_options(pool.get_ref(), &city_ids).await?,
        inclusions,
        exclusions,
        highlights,
    })
}

struct DayRow {
    id: String,
    day_number: i32,
    title: String,
    details: String,
    day_plan: String,
}

#[derive(Template)]
#[template(path = "itinerary.html")]
struct ItineraryPage {
    package_id: String,
    package_name: String,
    rows: Vec<DayRow>,
}

/// GET /admin/packages/{id}/itinerary
pub async fn package_itinerary_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let package = PackageRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    let days = ItineraryRepository::list_by_package(pool.get_ref(), package.id).await?;

    let rows = days
        .into_iter()
        .map(|day| DayRow {
            id: day.id.to_string(),
            day_number: day.day_number,
            title: day.title,
            details: text(&day.details),
            day_plan: day.day_plan.map(|v| v.to_string()).unwrap_or_default(),
        })
        .collect();

    html(ItineraryPage {
        package_id: package.id.to_string(),
        package_name: package.name,
        rows,
    })
}

// ---------------------------------------------------------------------------
// Tours

struct TourRow {
    id: String,
    name: String,
    tour_type: String,
}

#[derive(Template)]
#[template(path = "tours.html")]
struct TourListPage {
    rows: Vec<TourRow>,
}

/// GET /admin/tours
pub async fn tours_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (tours, _) = TourRepository::list(pool.get_ref(), &page_query()).await?;

    let rows = tours
        .into_iter()
        .map(|t| TourRow {
            id: t.id.to_string(),
            name: t.name,
            tour_type: text(&t.tour_type),
        })
        .collect();

    html(TourListPage { rows })
}

#[derive(Template)]
#[template(path = "tour_form.html")]
struct TourFormPage {
    heading: String,
    submit_method: String,
    submit_url: String,
    name: String,
    description: String,
    tour_type: String,
    image_url: String,
}

/// GET /admin/tours/new
pub async fn tour_new_page() -> Result<impl Responder, CmsError> {
    html(TourFormPage {
        heading: "New Tour".to_string(),
        submit_method: "POST".to_string(),
        submit_url: "/api/tours".to_string(),
        name: String::new(),
        description: String::new(),
        tour_type: String::new(),
        image_url: String::new(),
    })
}

/// GET /admin/tours/{id}/edit
pub async fn tour_edit_page(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, CmsError> {
    let t = TourRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;

    html(TourFormPage {
        heading: format!("Edit {}", t.name),
        submit_method: "PUT".to_string(),
        submit_url: format!("/api/tours/{}", t.id),
        name: t.name,
        description: text(&t.description),
        tour_type: text(&t.tour_type),
        image_url: text(&t.image_url),
    })
}

// ---------------------------------------------------------------------------
// Snippets

struct SnippetRow {
    id: String,
    label: String,
}

#[derive(Template)]
#[template(path = "snippets.html")]
struct SnippetsPage {
    inclusions: Vec<SnippetRow>,
    exclusions: Vec<SnippetRow>,
    highlights: Vec<SnippetRow>,
}

/// GET /admin/snippets
/// One page manages all three collections
pub async fn snippets_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let mut page = SnippetsPage {
        inclusions: Vec::new(),
        exclusions: Vec::new(),
        highlights: Vec::new(),
    };

    for kind in [
        SnippetKind::Inclusion,
        SnippetKind::Exclusion,
        SnippetKind::Highlight,
    ] {
        let (snippets, _) = SnippetRepository::list(pool.get_ref(), kind, &page_query()).await?;
        let rows: Vec<SnippetRow> = snippets
            .into_iter()
            .map(|s| SnippetRow {
                id: s.id.to_string(),
                label: s.label,
            })
            .collect();

        match kind {
            SnippetKind::Inclusion => page.inclusions = rows,
            SnippetKind::Exclusion => page.exclusions = rows,
            SnippetKind::Highlight => page.highlights = rows,
        }
    }

    html(page)
}

// ---------------------------------------------------------------------------
// Reviews

struct ReviewRow {
    id: String,
    package: String,
    author_name: String,
    rating: i32,
    title: String,
    is_approved: bool,
}

#[derive(Template)]
#[template(path = "reviews.html")]
struct ReviewListPage {
    rows: Vec<ReviewRow>,
}

/// GET /admin/reviews
pub async fn reviews_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (reviews, _) = ReviewRepository::list(pool.get_ref(), &page_query()).await?;
    let (packages, _) = PackageRepository::list(pool.get_ref(), &page_query()).await?;
    let names: HashMap<Uuid, String> = packages.into_iter().map(|p| (p.id, p.name)).collect();

    let rows = reviews
        .into_iter()
        .map(|r| ReviewRow {
            id: r.id.to_string(),
            package: names.get(&r.package_id).cloned().unwrap_or_default(),
            author_name: r.author_name,
            rating: r.rating,
            title: text(&r.title),
            is_approved: r.is_approved,
        })
        .collect();

    html(ReviewListPage { rows })
}

// ---------------------------------------------------------------------------
// Inquiries

struct InquiryRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    package: String,
    travel_date: String,
    traveler_count: String,
    status: String,
    message: String,
    created: String,
}

#[derive(Template)]
#[template(path = "inquiries.html")]
struct InquiryListPage {
    rows: Vec<InquiryRow>,
}

/// GET /admin/inquiries
pub async fn inquiries_page(pool: web::Data<PgPool>) -> Result<impl Responder, CmsError> {
    let (inquiries, _) = InquiryRepository::list(pool.get_ref(), &page_query()).await?;
    let (packages, _) = PackageRepository::list(pool.get_ref(), &page_query()).await?;
    let names: HashMap<Uuid, String> = packages.into_iter().map(|p| (p.id, p.name)).collect();

    let rows = inquiries
        .into_iter()
        .map(|i| InquiryRow {
            id: i.id.to_string(),
            name: i.name,
            email: i.email,
            phone: text(&i.phone),
            package: i
                .package_id
                .and_then(|id| names.get(&id).cloned())
                .unwrap_or_default(),
            travel_date: i
                .travel_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            traveler_count: i
                .traveler_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            status: status_str(i.status).to_string(),
            message: i.message,
            created: i.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    html(InquiryListPage { rows })
}

/// Configuration for the admin page routes
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(dashboard))
        .route("/destinations", web::get().to(destinations_page))
        .route("/destinations/new", web::get().to(destination_new_page))
        .route("/destinations/{id}/edit", web::get().to(destination_edit_page))
        .route("/cities", web::get().to(cities_page))
        .route("/cities/new", web::get().to(city_new_page))
        .route("/cities/{id}/edit", web::get().to(city_edit_page))
        .route("/hotels", web::get().to(hotels_page))
        .route("/hotels/new", web::get().to(hotel_new_page))
        .route("/hotels/{id}/edit", web::get().to(hotel_edit_page))
        .route("/hotels/{id}/images", web::get().to(hotel_images_page))
        .route("/packages", web::get().to(packages_page))
        .route("/packages/new", web::get().to(package_new_page))
        .route("/packages/{id}/edit", web::get().to(package_edit_page))
        .route("/packages/{id}/itinerary", web::get().to(package_itinerary_page))
        .route("/tours", web::get().to(tours_page))
        .route("/tours/new", web::get().to(tour_new_page))
        .route("/tours/{id}/edit", web::get().to(tour_edit_page))
        .route("/snippets", web::get().to(snippets_page))
        .route("/reviews", web::get().to(reviews_page))
        .route("/inquiries", web::get().to(inquiries_page));
}
