//! Map-tile cache keys for location and venue content.

use chatview_protocol::Location;

/// Fixed tile request parameters. Part of the cache key: changing them
/// invalidates every cached tile.
pub const LOCATION_WIDTH: u32 = 618;
pub const LOCATION_HEIGHT: u32 = 348;
pub const LOCATION_SCALE: u32 = 2;
pub const LOCATION_ZOOM: u32 = 16;

/// Cache/lookup key for a location's map tile. The format is shared with the
/// tile cache and must stay byte-for-byte stable.
#[must_use]
pub fn map_tile_key(location: &Location) -> String {
    format!(
        "loc={},{}&size={},{}&scale={}&zoom={}",
        location.latitude,
        location.longitude,
        LOCATION_WIDTH,
        LOCATION_HEIGHT,
        LOCATION_SCALE,
        LOCATION_ZOOM
    )
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_format_is_stable() {
        let location = Location {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        assert_eq!(
            map_tile_key(&location),
            "loc=48.8566,2.3522&size=618,348&scale=2&zoom=16"
        );
    }

    #[test]
    fn integral_coordinates_print_without_fraction() {
        let location = Location {
            latitude: 48.0,
            longitude: -2.0,
        };
        assert_eq!(
            map_tile_key(&location),
            "loc=48,-2&size=618,348&scale=2&zoom=16"
        );
    }
}
