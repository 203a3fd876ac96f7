//! Parameters for the map image `routing` endpoint.

use super::{QueryPairs, QueryParams, Slots, ensure_finite, push_non_empty, push_optional};
use crate::{ParamError, Waypoint};

/// Number of intermediate POI fields (`poix0`..`poix6`).
pub const MAX_IMAGE_POIS: usize = 7;

/// Largest waypoint list accepted: first, last and the intermediate POIs.
pub const MAX_IMAGE_WAYPOINTS: usize = MAX_IMAGE_POIS + 2;

const ENDPOINT: &str = "images";
const MIN_IMAGE_WAYPOINTS: usize = 2;

/// Query parameters for a rendered route image.
///
/// The first and last waypoints become `waypoint0` and `waypoint1`; every
/// waypoint in between is drawn as a POI marker. Stop-over values are not
/// meaningful for images and are dropped.
///
/// # Examples
///
/// ```
/// use here_core::{ImagesParams, QueryParams, Waypoint};
///
/// let waypoints = [
///     Waypoint::new(52.50, 13.40),
///     Waypoint::new(52.55, 13.45).with_stop_over(60),
///     Waypoint::new(52.60, 13.50),
/// ];
/// let params = ImagesParams::new(&waypoints, "key")?.with_size(640, 480);
///
/// assert_eq!(params.waypoint0, "52.500000,13.400000;");
/// assert_eq!(params.waypoint1, "52.600000,13.500000;");
/// assert_eq!(params.poi(0), Some("52.550000,13.450000;"));
/// assert!(params.query_pairs().contains(&("w".to_owned(), "640".to_owned())));
/// # Ok::<(), here_core::ParamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagesParams {
    /// Route start, sent as `waypoint0`.
    pub waypoint0: String,
    /// Route end, sent as `waypoint1`.
    pub waypoint1: String,
    pois: Slots<MAX_IMAGE_POIS>,
    /// POI marker theme, sent as `poithm`.
    pub poi_theme: u32,
    /// Route line colours, sent as `lc0` and `lc1`.
    pub line_colors: [Option<String>; 2],
    /// Route line widths, sent as `lw0` and `lw1`.
    pub line_widths: [Option<u32>; 2],
    /// Resolution in pixels per inch, sent as `ppi`.
    pub resolution: Option<u32>,
    /// Image width in pixels, sent as `w`.
    pub width: Option<u32>,
    /// Image height in pixels, sent as `h`.
    pub height: Option<u32>,
    /// API key sent as `apikey`.
    pub api_key: String,
}

impl ImagesParams {
    /// Build image parameters from ordered waypoints.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NotEnoughWaypoints`] for fewer than two
    /// waypoints and [`ParamError::TooManyWaypoints`] for more than
    /// [`MAX_IMAGE_WAYPOINTS`]. Returns [`ParamError::NonFiniteCoordinate`]
    /// when a coordinate is NaN or infinite.
    pub fn new(waypoints: &[Waypoint], api_key: impl Into<String>) -> Result<Self, ParamError> {
        let (Some((first, rest)), Some(last)) = (waypoints.split_first(), waypoints.last()) else {
            return Err(not_enough(waypoints.len()));
        };
        let Some((_, intermediate)) = rest.split_last() else {
            return Err(not_enough(waypoints.len()));
        };
        let pois = Slots::fill(ENDPOINT, intermediate.iter().map(Waypoint::to_poi_param))
            .map_err(|_| ParamError::TooManyWaypoints {
                endpoint: ENDPOINT,
                max: MAX_IMAGE_WAYPOINTS,
                actual: waypoints.len(),
            })?;
        ensure_finite(ENDPOINT, waypoints)?;
        Ok(Self {
            waypoint0: first.to_poi_param(),
            waypoint1: last.to_poi_param(),
            pois,
            poi_theme: 0,
            line_colors: [None, None],
            line_widths: [None, None],
            resolution: None,
            width: None,
            height: None,
            api_key: api_key.into(),
        })
    }

    /// Set the POI marker theme.
    #[must_use]
    pub const fn with_poi_theme(mut self, theme: u32) -> Self {
        self.poi_theme = theme;
        self
    }

    /// Set the route line colours as hex RGB(A) strings.
    #[must_use]
    pub fn with_line_colors(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.line_colors = [Some(primary.into()), Some(secondary.into())];
        self
    }

    /// Set the route line widths in pixels.
    #[must_use]
    pub const fn with_line_widths(mut self, primary: u32, secondary: u32) -> Self {
        self.line_widths = [Some(primary), Some(secondary)];
        self
    }

    /// Set the resolution in pixels per inch.
    #[must_use]
    pub const fn with_resolution(mut self, ppi: u32) -> Self {
        self.resolution = Some(ppi);
        self
    }

    /// Set the image dimensions in pixels.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Encoded POI in slot `index`.
    #[must_use]
    pub fn poi(&self, index: usize) -> Option<&str> {
        self.pois.get(index)
    }

    /// All POI slots.
    #[must_use]
    pub const fn pois(&self) -> &Slots<MAX_IMAGE_POIS> {
        &self.pois
    }
}

const fn not_enough(actual: usize) -> ParamError {
    ParamError::NotEnoughWaypoints {
        endpoint: ENDPOINT,
        min: MIN_IMAGE_WAYPOINTS,
        actual,
    }
}

impl QueryParams for ImagesParams {
    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_non_empty(&mut pairs, "waypoint0", &self.waypoint0);
        push_non_empty(&mut pairs, "waypoint1", &self.waypoint1);
        pairs.extend(
            self.pois
                .pairs("poix", 0)
                .map(|(key, value)| (key, value.to_owned())),
        );
        pairs.push(("poithm".to_owned(), self.poi_theme.to_string()));
        let [lc0, lc1] = &self.line_colors;
        push_optional(&mut pairs, "lc0", lc0.as_ref());
        push_optional(&mut pairs, "lc1", lc1.as_ref());
        let [lw0, lw1] = &self.line_widths;
        push_optional(&mut pairs, "lw0", lw0.as_ref());
        push_optional(&mut pairs, "lw1", lw1.as_ref());
        push_optional(&mut pairs, "ppi", self.resolution.as_ref());
        push_optional(&mut pairs, "w", self.width.as_ref());
        push_optional(&mut pairs, "h", self.height.as_ref());
        push_non_empty(&mut pairs, "apikey", &self.api_key);
        pairs
    }
}
