// Unit tests for Live Match

use live_match::core::{
    availability::check_availability,
    revenue::calculate_estimated_revenue,
    scoring::{
        calculate_engagement_score, calculate_expertise_score, calculate_match_score,
        calculate_reliability_score, calculate_sales_score,
    },
    tier::{get_host_tier, tier_score},
};
use live_match::models::{
    Availability, HostAvailability, HostPerformance, HostPricing, HostSkills, LiveShowRequest,
    Product, RequestPriority, ShowBudget, ShowHost, ShowHostTier, ShowSchedule, Trend,
};

fn create_host(tier: ShowHostTier, conversion_rate: f64, avg_rating: f64, trend: Trend) -> ShowHost {
    ShowHost {
        id: "host".to_string(),
        name: "Host".to_string(),
        tier,
        categories: vec!["fashion".to_string()],
        skills: HostSkills {
            presentation: 85,
            product_knowledge: 70,
            sales_closing: 90,
            crisis_management: 55,
            audience_interaction: Some(95),
        },
        performance: HostPerformance {
            conversion_rate,
            avg_sales_per_show: 7_500_000.0,
            avg_viewers: 4_200.0,
            avg_watch_time_minutes: 22.0,
            return_viewer_rate: 0.4,
            avg_rating,
            total_shows: 75,
            cancellation_rate: 0.03,
            trend,
        },
        availability: HostAvailability {
            preferred_days: vec![1, 2, 3, 4, 5, 6, 7],
            preferred_hours: vec![19, 20, 21],
            blocked_dates: vec![],
            current_bookings: 0,
            max_shows_per_week: 5,
        },
        pricing: HostPricing {
            base_fee: 100_000,
            commission_rate: 0.1,
        },
    }
}

fn create_request(products: Vec<Product>) -> LiveShowRequest {
    LiveShowRequest {
        id: "req".to_string(),
        brand_id: "brand".to_string(),
        category: "fashion".to_string(),
        schedule: ShowSchedule {
            date: "2026-11-06".parse().unwrap(),
            start_time: "20:00".to_string(),
        },
        budget: ShowBudget {
            host_budget_max: 300_000,
            expected_sales: 5_000_000,
        },
        products,
        priority: RequestPriority::Normal,
    }
}

fn performance(shows: u32, avg_sales: f64, rating: f64, conversion: f64) -> HostPerformance {
    HostPerformance {
        conversion_rate: conversion,
        avg_sales_per_show: avg_sales,
        avg_viewers: 0.0,
        avg_watch_time_minutes: 0.0,
        return_viewer_rate: 0.0,
        avg_rating: rating,
        total_shows: shows,
        cancellation_rate: 0.0,
        trend: Trend::Flat,
    }
}

#[test]
fn test_all_scores_within_unit_range() {
    let trends = [Trend::Up, Trend::Flat, Trend::Down];
    let conversions = [0.0, 0.01, 0.05, 0.3, 1.0];
    let ratings = [0.0, 2.5, 5.0];

    for tier in ShowHostTier::ALL {
        for trend in trends {
            for conversion in conversions {
                for rating in ratings {
                    let host = create_host(tier, conversion, rating, trend);
                    let (score, breakdown) = calculate_match_score(&host, "fashion");

                    for value in [
                        score,
                        breakdown.sales,
                        breakdown.engagement,
                        breakdown.expertise,
                        breakdown.reliability,
                    ] {
                        assert!(
                            (0.0..=1.0).contains(&value),
                            "Score {} out of range for {:?}/{:?}",
                            value,
                            tier,
                            trend
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_sub_scores_match_breakdown() {
    let host = create_host(ShowHostTier::Star, 0.04, 4.7, Trend::Up);
    let (score, breakdown) = calculate_match_score(&host, "fashion");

    assert_eq!(breakdown.sales, calculate_sales_score(&host));
    assert_eq!(breakdown.engagement, calculate_engagement_score(&host));
    assert_eq!(breakdown.expertise, calculate_expertise_score(&host, "fashion"));
    assert_eq!(breakdown.reliability, calculate_reliability_score(&host));

    let expected = 0.35 * breakdown.sales
        + 0.25 * breakdown.engagement
        + 0.20 * breakdown.expertise
        + 0.20 * breakdown.reliability;
    assert!((score - expected).abs() < 1e-12);
}

#[test]
fn test_complex_category_weights_product_knowledge() {
    // presentation 85 beats product knowledge 70, so a complex category scores lower
    let host = create_host(ShowHostTier::Pro, 0.03, 4.0, Trend::Flat);
    let mut simple = host.clone();
    simple.categories = vec!["food".to_string()];

    assert!(calculate_expertise_score(&host, "fashion") < calculate_expertise_score(&simple, "food"));
}

#[test]
fn test_revenue_reference_scenario() {
    let mut host = create_host(ShowHostTier::Pro, 0.05, 4.5, Trend::Flat);
    host.performance.avg_sales_per_show = 10_000_000.0;

    let request = create_request(vec![Product {
        name: "Jacket".to_string(),
        price: 50_000,
        inventory: 200,
    }]);

    let revenue = calculate_estimated_revenue(&host, &request);
    assert_eq!(revenue.gross_sales, 175_000);
    assert_eq!(revenue.host_commission, 17_500);
    assert_eq!(revenue.platform_fee, 26_250);
    assert_eq!(revenue.host_total, 117_500);
    assert_eq!(revenue.brand_net, 31_250);
}

#[test]
fn test_revenue_split_sums_to_gross() {
    let commission_rates = [0.0, 0.033, 0.1, 0.175, 0.25];

    for tier in ShowHostTier::ALL {
        for rate in commission_rates {
            let mut host = create_host(tier, 0.0427, 4.0, Trend::Flat);
            host.pricing.commission_rate = rate;

            let request = create_request(vec![
                Product {
                    name: "A".to_string(),
                    price: 19_900,
                    inventory: 37,
                },
                Product {
                    name: "B".to_string(),
                    price: 89_000,
                    inventory: 500,
                },
            ]);

            let r = calculate_estimated_revenue(&host, &request);
            assert_eq!(r.brand_net + r.host_fee + r.host_commission + r.platform_fee, r.gross_sales);
        }
    }
}

#[test]
fn test_blocked_date_is_always_busy() {
    let request = create_request(vec![]);

    for bookings in [0, 2, 10] {
        for hour in ["00:00", "12:00", "20:00"] {
            let mut host = create_host(ShowHostTier::Legend, 0.05, 5.0, Trend::Up);
            host.availability.blocked_dates = vec![request.schedule.date];
            host.availability.current_bookings = bookings;

            let schedule = ShowSchedule {
                date: request.schedule.date,
                start_time: hour.to_string(),
            };
            assert_eq!(check_availability(&host, &schedule), Availability::Busy);
        }
    }
}

#[test]
fn test_blocked_other_date_does_not_block() {
    let request = create_request(vec![]);
    let mut host = create_host(ShowHostTier::Pro, 0.03, 4.0, Trend::Flat);
    host.availability.blocked_dates = vec!["2026-11-07".parse().unwrap()];

    assert_eq!(
        check_availability(&host, &request.schedule),
        Availability::Available
    );
}

#[test]
fn test_tier_reference_scenario() {
    let perf = performance(400, 10_000_000.0, 5.0, 0.05);
    assert_eq!(tier_score(&perf), 100.0);
    assert_eq!(get_host_tier(&perf), ShowHostTier::Legend);
}

#[test]
fn test_tier_is_monotonic() {
    let shows = [0, 20, 60, 100, 400];
    let sales = [0.0, 1_000_000.0, 5_000_000.0, 20_000_000.0];
    let ratings = [0.0, 3.0, 4.5, 5.0];
    let conversions = [0.0, 0.01, 0.03, 0.08];

    for &s in &shows {
        for &a in &sales {
            for &r in &ratings {
                for &c in &conversions {
                    let base = get_host_tier(&performance(s, a, r, c));

                    assert!(get_host_tier(&performance(s + 40, a, r, c)) >= base);
                    assert!(get_host_tier(&performance(s, a + 2_000_000.0, r, c)) >= base);
                    assert!(get_host_tier(&performance(s, a, (r + 0.5).min(5.0), c)) >= base);
                    assert!(get_host_tier(&performance(s, a, r, c + 0.01)) >= base);
                }
            }
        }
    }
}
