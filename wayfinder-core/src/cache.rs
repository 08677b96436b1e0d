//! In-memory, TTL-bound cache of route responses.
//!
//! The cache exists to avoid redundant calls to the external routing service
//! for stop/mode combinations already resolved within the TTL window. It is
//! an explicit object with an injectable clock rather than process-global
//! state, so tests can drive expiry deterministically and hosts can run
//! several independent caches. Entries live only for the lifetime of the
//! owning value; there is no persistence.
//!
//! Staleness is checked lazily on lookup. Nothing evicts in the background:
//! memory growth is bounded by practical session length, and an expired
//! entry is simply ignored until overwritten or swept by
//! [`RouteCache::purge_expired`].
//!
//! The cache itself is not synchronised. In a multi-threaded host the store
//! must sit behind a mutual-exclusion primitive; note that the check-then-act
//! sequence of a lookup miss, a concurrent fetch, and a double store is a
//! known, accepted race — both writers store equivalent responses and the
//! last write wins without corruption.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::{RouteResponse, Stop, TravelMode};

/// How long a cached route response stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Source of the current instant, injectable for TTL tests.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    response: RouteResponse,
    created: Instant,
}

/// Session-scoped cache of route responses keyed by stop order and mode.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use wayfinder_core::{RouteCache, RouteResponse, Stop, TravelMode};
///
/// let stops = vec![
///     Stop::new("a", Coord { x: 0.0, y: 0.0 }),
///     Stop::new("b", Coord { x: 1.0, y: 1.0 }),
/// ];
/// let response = RouteResponse {
///     geometry: vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }],
///     duration: Duration::from_secs(600),
/// };
///
/// let mut cache = RouteCache::new();
/// assert!(cache.lookup(&stops, TravelMode::Driving).is_none());
/// cache.store(&stops, TravelMode::Driving, response.clone());
/// assert_eq!(cache.lookup(&stops, TravelMode::Driving), Some(response));
/// ```
#[derive(Debug)]
pub struct RouteCache<C: Clock = SystemClock> {
    entries: HashMap<String, CacheEntry>,
    clock: C,
    ttl: Duration,
}

impl RouteCache<SystemClock> {
    /// Construct a cache on the system clock with the default 24-hour TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RouteCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RouteCache<C> {
    /// Construct a cache on an explicit clock with the default TTL.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
            ttl: CACHE_TTL,
        }
    }

    /// Override the TTL, returning `self` for chaining.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Return the cached response for this exact stop order and mode, if
    /// still fresh.
    ///
    /// Expired entries are treated as misses; they stay in the store until
    /// overwritten or purged. The returned response is a copy, so caller
    /// mutation cannot corrupt the cached value.
    #[must_use]
    pub fn lookup(&self, stops: &[Stop], mode: TravelMode) -> Option<RouteResponse> {
        let key = cache_key(stops, mode);
        let entry = self.entries.get(&key)?;
        if self.is_expired(entry) {
            debug!("route cache expired entry for {key}");
            return None;
        }
        debug!("route cache hit for {key}");
        Some(entry.response.clone())
    }

    /// Insert or overwrite the response for this stop order and mode,
    /// stamped with the current time. Last write wins.
    pub fn store(&mut self, stops: &[Stop], mode: TravelMode, response: RouteResponse) {
        let key = cache_key(stops, mode);
        debug!("route cache store for {key}");
        self.entries.insert(
            key,
            CacheEntry {
                response,
                created: self.clock.now(),
            },
        );
    }

    /// Drop every expired entry.
    ///
    /// Purely opportunistic; lookups already ignore stale entries, so this
    /// only reclaims memory in long-lived sessions.
    pub fn purge_expired(&mut self) {
        let now = self.clock.now();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.created) < ttl);
    }

    /// Number of entries physically in the store, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.clock.now().saturating_duration_since(entry.created) >= self.ttl
    }
}

/// Deterministic cache key over the travel mode and the ordered stop
/// coordinates.
///
/// Identical coordinates in identical order under the same mode always
/// produce the same key; any difference in order, coordinates, or mode
/// yields a different key. Addresses and identifiers deliberately do not
/// participate: two stops at the same point route identically.
fn cache_key(stops: &[Stop], mode: TravelMode) -> String {
    let mut key = mode.as_str().to_owned();
    for stop in stops {
        key.push('|');
        key.push_str(&format!("{},{}", stop.location.y, stop.location.x));
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualClock;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn stop(address: &str, x: f64, y: f64) -> Stop {
        Stop::new(address, Coord { x, y })
    }

    fn response(duration_secs: u64) -> RouteResponse {
        RouteResponse {
            geometry: vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }],
            duration: Duration::from_secs(duration_secs),
        }
    }

    #[fixture]
    fn stops() -> Vec<Stop> {
        vec![stop("a", 0.0, 0.0), stop("b", 1.0, 1.0)]
    }

    #[rstest]
    fn store_then_lookup_hits(stops: Vec<Stop>) {
        let mut cache = RouteCache::new();
        cache.store(&stops, TravelMode::Driving, response(600));
        assert_eq!(
            cache.lookup(&stops, TravelMode::Driving),
            Some(response(600))
        );
    }

    #[rstest]
    fn different_mode_misses(stops: Vec<Stop>) {
        let mut cache = RouteCache::new();
        cache.store(&stops, TravelMode::Driving, response(600));
        assert!(cache.lookup(&stops, TravelMode::Walking).is_none());
    }

    #[rstest]
    fn reordered_stops_miss(stops: Vec<Stop>) {
        let mut cache = RouteCache::new();
        let reversed: Vec<Stop> = stops.iter().rev().cloned().collect();
        cache.store(&reversed, TravelMode::Driving, response(600));
        assert!(cache.lookup(&stops, TravelMode::Driving).is_none());
    }

    #[rstest]
    fn expired_entry_misses(stops: Vec<Stop>) {
        let clock = ManualClock::new();
        let mut cache = RouteCache::with_clock(clock.clone());
        cache.store(&stops, TravelMode::Driving, response(600));

        clock.advance(Duration::from_secs(25 * 60 * 60));
        assert!(cache.lookup(&stops, TravelMode::Driving).is_none());
        // The stale entry still physically resides in the store.
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn entry_just_inside_ttl_still_hits(stops: Vec<Stop>) {
        let clock = ManualClock::new();
        let mut cache = RouteCache::with_clock(clock.clone());
        cache.store(&stops, TravelMode::Driving, response(600));

        clock.advance(CACHE_TTL - Duration::from_secs(1));
        assert!(cache.lookup(&stops, TravelMode::Driving).is_some());
        clock.advance(Duration::from_secs(1));
        assert!(cache.lookup(&stops, TravelMode::Driving).is_none());
    }

    #[rstest]
    fn last_write_wins(stops: Vec<Stop>) {
        let mut cache = RouteCache::new();
        cache.store(&stops, TravelMode::Driving, response(600));
        cache.store(&stops, TravelMode::Driving, response(900));
        assert_eq!(
            cache.lookup(&stops, TravelMode::Driving),
            Some(response(900))
        );
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn purge_drops_only_expired_entries(stops: Vec<Stop>) {
        let clock = ManualClock::new();
        let mut cache = RouteCache::with_clock(clock.clone()).with_ttl(Duration::from_secs(60));
        cache.store(&stops, TravelMode::Driving, response(600));
        clock.advance(Duration::from_secs(90));
        cache.store(&stops, TravelMode::Cycling, response(300));

        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        assert!(cache.lookup(&stops, TravelMode::Cycling).is_some());
    }

    #[rstest]
    fn caller_mutation_does_not_corrupt_store(stops: Vec<Stop>) {
        let mut cache = RouteCache::new();
        cache.store(&stops, TravelMode::Driving, response(600));

        let mut held = cache
            .lookup(&stops, TravelMode::Driving)
            .expect("fresh entry");
        held.geometry.clear();
        held.duration = Duration::ZERO;

        assert_eq!(
            cache.lookup(&stops, TravelMode::Driving),
            Some(response(600))
        );
    }

    #[rstest]
    fn key_covers_mode_and_ordered_coordinates() {
        let a = stop("a", 0.5, 1.5);
        let b = stop("b", 2.5, 3.5);
        let key = cache_key(&[a.clone(), b.clone()], TravelMode::Cycling);
        assert_eq!(key, "cycling|1.5,0.5|3.5,2.5");
        assert_ne!(key, cache_key(&[b, a], TravelMode::Cycling));
    }

    #[rstest]
    fn key_ignores_addresses_and_ids() {
        let first = vec![stop("name one", 0.0, 0.0), stop("name two", 1.0, 1.0)];
        let second = vec![stop("other", 0.0, 0.0), stop("labels", 1.0, 1.0)];
        assert_eq!(
            cache_key(&first, TravelMode::Driving),
            cache_key(&second, TravelMode::Driving)
        );
    }
}
