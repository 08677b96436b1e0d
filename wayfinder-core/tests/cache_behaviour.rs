//! Behaviour of the TTL-bound route response cache across its public API.

use std::time::Duration;

use geo::Coord;
use rstest::{fixture, rstest};
use wayfinder_core::test_support::ManualClock;
use wayfinder_core::{CACHE_TTL, RouteCache, RouteResponse, Stop, TravelMode};

fn stop(address: &str, lon: f64, lat: f64) -> Stop {
    Stop::new(address, Coord { x: lon, y: lat })
}

fn response(secs: u64) -> RouteResponse {
    RouteResponse {
        geometry: vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }],
        duration: Duration::from_secs(secs),
    }
}

#[fixture]
fn pair() -> Vec<Stop> {
    vec![stop("a", 0.0, 0.0), stop("b", 1.0, 1.0)]
}

#[rstest]
fn fresh_cache_misses(pair: Vec<Stop>) {
    let cache = RouteCache::new();
    assert!(cache.lookup(&pair, TravelMode::Driving).is_none());
}

#[rstest]
fn stored_response_is_returned_for_same_stops_and_mode(pair: Vec<Stop>) {
    let mut cache = RouteCache::new();
    cache.store(&pair, TravelMode::Driving, response(600));

    assert_eq!(
        cache.lookup(&pair, TravelMode::Driving),
        Some(response(600))
    );
    // Same stops under a different mode are a distinct computation.
    assert!(cache.lookup(&pair, TravelMode::Walking).is_none());
}

#[rstest]
fn reversed_order_is_a_different_key(pair: Vec<Stop>) {
    let mut cache = RouteCache::new();
    let reversed: Vec<Stop> = pair.iter().rev().cloned().collect();
    cache.store(&reversed, TravelMode::Driving, response(600));

    assert!(cache.lookup(&pair, TravelMode::Driving).is_none());
    assert!(cache.lookup(&reversed, TravelMode::Driving).is_some());
}

#[rstest]
fn entries_expire_after_the_ttl(pair: Vec<Stop>) {
    let clock = ManualClock::new();
    let mut cache = RouteCache::with_clock(clock.clone());
    cache.store(&pair, TravelMode::Driving, response(600));

    clock.advance(Duration::from_secs(25 * 60 * 60));
    assert!(cache.lookup(&pair, TravelMode::Driving).is_none());
}

#[rstest]
fn ttl_boundary_is_exclusive(pair: Vec<Stop>) {
    let clock = ManualClock::new();
    let mut cache = RouteCache::with_clock(clock.clone());
    cache.store(&pair, TravelMode::Driving, response(600));

    clock.advance(CACHE_TTL);
    // now - created == TTL is already stale.
    assert!(cache.lookup(&pair, TravelMode::Driving).is_none());
}

#[rstest]
fn restoring_freshness_requires_a_new_store(pair: Vec<Stop>) {
    let clock = ManualClock::new();
    let mut cache = RouteCache::with_clock(clock.clone());
    cache.store(&pair, TravelMode::Driving, response(600));
    clock.advance(Duration::from_secs(25 * 60 * 60));

    cache.store(&pair, TravelMode::Driving, response(900));
    assert_eq!(
        cache.lookup(&pair, TravelMode::Driving),
        Some(response(900))
    );
}

#[rstest]
fn independent_caches_do_not_share_state(pair: Vec<Stop>) {
    let mut warm = RouteCache::new();
    let cold = RouteCache::new();
    warm.store(&pair, TravelMode::Driving, response(600));

    assert!(warm.lookup(&pair, TravelMode::Driving).is_some());
    assert!(cold.lookup(&pair, TravelMode::Driving).is_none());
}
