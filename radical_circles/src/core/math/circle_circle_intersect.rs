use super::{Circle, Vector2};
use crate::core::traits::Real;
use crate::error::{Error, Result};
use std::fmt;

/// Positional relationship between two circles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    /// Same center and same radius, every point is shared.
    Coincident,
    /// Same center, different radius, the smaller circle lies strictly inside the larger.
    ConcentricContained,
    /// Distinct centers, one circle lies strictly inside the other.
    EccentricContained,
    /// One circle touches the other from inside at a single point.
    InternallyTangent,
    /// Boundaries cross at two points.
    Overlapping,
    /// Circles touch from outside at a single point.
    ExternallyTangent,
    /// Circles lie outside each other.
    Separate,
}

impl IntersectionType {
    /// Number of intersect points, `-1` for [IntersectionType::Coincident] (infinite).
    pub fn intersection_point_count(self) -> i32 {
        use IntersectionType::*;
        match self {
            Coincident => -1,
            ConcentricContained | EccentricContained | Separate => 0,
            InternallyTangent | ExternallyTangent => 1,
            Overlapping => 2,
        }
    }

    pub fn is_concentric(self) -> bool {
        matches!(
            self,
            IntersectionType::Coincident | IntersectionType::ConcentricContained
        )
    }

    pub fn is_contained(self) -> bool {
        matches!(
            self,
            IntersectionType::ConcentricContained | IntersectionType::EccentricContained
        )
    }

    pub fn is_tangent(self) -> bool {
        self.intersection_point_count() == 1
    }

    /// Returns `true` only for circles lying outside each other ([IntersectionType::Separate]).
    /// Contained circles also share no points but are not disjoint in this sense.
    pub fn is_disjoint(self) -> bool {
        self == IntersectionType::Separate
    }

    /// Classify directly from the radii and the distance between centers, without computing the
    /// radical line.
    ///
    /// Selects the same type as [CircleCircleIntersection::new] whenever the inputs are exactly
    /// representable (the two agree by the Pythagorean identity), but near tangency the two may
    /// round differently.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radical_circles::core::math::*;
    /// assert_eq!(IntersectionType::from_radii(1.0, 1.0, 2.0), IntersectionType::ExternallyTangent);
    /// assert_eq!(IntersectionType::from_radii(5.0, 5.0, 6.0), IntersectionType::Overlapping);
    /// assert_eq!(IntersectionType::from_radii(5.0, 2.0, 0.0), IntersectionType::ConcentricContained);
    /// ```
    pub fn from_radii<T>(radius1: T, radius2: T, center_distance: T) -> Self
    where
        T: Real,
    {
        use IntersectionType::*;

        if center_distance == T::zero() {
            return if radius1 == radius2 {
                Coincident
            } else {
                ConcentricContained
            };
        }

        let radius_sum = radius1 + radius2;
        if center_distance >= radius_sum {
            return if center_distance == radius_sum {
                ExternallyTangent
            } else {
                Separate
            };
        }

        let radius_diff = (radius1 - radius2).abs();
        if center_distance <= radius_diff {
            return if center_distance == radius_diff {
                InternallyTangent
            } else {
                EccentricContained
            };
        }

        Overlapping
    }
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Radical line of two circles with distinct centers.
///
/// The radical line is perpendicular to the line joining the centers and passes through the
/// intersect points (or the tangent point) when the circles touch.
#[derive(Debug, Copy, Clone)]
pub struct RadicalLine<T = f64> {
    /// Where the radical line crosses the line joining the centers (radical point).
    pub point: Vector2<T>,
    /// Signed distance from the first circle's center to the radical line, positive when the
    /// line lies toward the second center.
    pub c1_distance: T,
    /// Signed distance from the second circle's center to the radical line, positive when the
    /// line lies toward the first center.
    pub c2_distance: T,
    /// Unit vector from the first center toward the second center.
    pub center_versor: Vector2<T>,
    /// Unit vector along the radical line, `center_versor` rotated 90 degrees counter clockwise
    /// (points left when looking from the first center toward the second).
    pub versor: Vector2<T>,
}

impl<T> RadicalLine<T>
where
    T: Real,
{
    /// Point on the radical line at signed `offset` from the radical point along
    /// [RadicalLine::versor].
    pub fn point_at(&self, offset: T) -> Vector2<T> {
        self.point + self.versor.scale(offset)
    }
}

/// Intersect geometry of two circles, one variant per [IntersectionType] carrying the values
/// that are defined for it.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T = f64> {
    Coincident,
    ConcentricContained,
    EccentricContained {
        radical: RadicalLine<T>,
    },
    InternallyTangent {
        radical: RadicalLine<T>,
        /// Tangent point, same as the radical point.
        point: Vector2<T>,
    },
    Overlapping {
        radical: RadicalLine<T>,
        /// Intersect point to the left of the center line (`radical.versor` side).
        point1: Vector2<T>,
        /// Intersect point to the right of the center line.
        point2: Vector2<T>,
        /// Distance from the radical point to either intersect point.
        half_chord: T,
    },
    ExternallyTangent {
        radical: RadicalLine<T>,
        /// Tangent point, same as the radical point.
        point: Vector2<T>,
    },
    Separate {
        radical: RadicalLine<T>,
    },
}

impl<T> CircleCircleIntr<T>
where
    T: Real,
{
    pub fn intersection_type(&self) -> IntersectionType {
        use CircleCircleIntr::*;
        match self {
            Coincident => IntersectionType::Coincident,
            ConcentricContained => IntersectionType::ConcentricContained,
            EccentricContained { .. } => IntersectionType::EccentricContained,
            InternallyTangent { .. } => IntersectionType::InternallyTangent,
            Overlapping { .. } => IntersectionType::Overlapping,
            ExternallyTangent { .. } => IntersectionType::ExternallyTangent,
            Separate { .. } => IntersectionType::Separate,
        }
    }

    /// Radical line, `None` for concentric circles.
    pub fn radical_line(&self) -> Option<&RadicalLine<T>> {
        use CircleCircleIntr::*;
        match self {
            Coincident | ConcentricContained => None,
            EccentricContained { radical }
            | InternallyTangent { radical, .. }
            | Overlapping { radical, .. }
            | ExternallyTangent { radical, .. }
            | Separate { radical } => Some(radical),
        }
    }
}

/// Result of intersecting two circles.
///
/// Computed in one pass by [CircleCircleIntersection::new] and immutable afterwards. The
/// center distance is always available, everything else depends on the
/// [type](CircleCircleIntersection::intersection_type):
///
/// * eccentric circles (centers differ) have a [RadicalLine],
/// * tangent circles have a single [intersection_point](CircleCircleIntersection::intersection_point),
/// * overlapping circles have an [intersection_point_pair](CircleCircleIntersection::intersection_point_pair)
///   and a [half_chord_length](CircleCircleIntersection::half_chord_length).
///
/// References: <http://paulbourke.net/geometry/circlesphere/>,
/// <http://mathworld.wolfram.com/Circle-CircleIntersection.html>.
///
/// # Examples
///
/// ```
/// # use radical_circles::core::math::*;
/// let c1 = Circle::new(vec2(0.0, 0.0), 5.0).unwrap();
/// let c2 = Circle::new(vec2(6.0, 0.0), 5.0).unwrap();
/// let intr = CircleCircleIntersection::new(c1, c2);
///
/// assert_eq!(intr.intersection_type(), IntersectionType::Overlapping);
/// assert_eq!(intr.center_distance(), 6.0);
/// assert_eq!(intr.half_chord_length(), Some(4.0));
///
/// let (p1, p2) = intr.intersection_point_pair().unwrap();
/// assert!(p1.fuzzy_eq(vec2(3.0, 4.0)));
/// assert!(p2.fuzzy_eq(vec2(3.0, -4.0)));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct CircleCircleIntersection<T = f64> {
    c1: Circle<T>,
    c2: Circle<T>,
    center_distance: T,
    intr: CircleCircleIntr<T>,
}

impl<T> CircleCircleIntersection<T>
where
    T: Real,
{
    /// Intersect `c1` with `c2`. Never fails, every pair of circles has a classification.
    ///
    /// All comparisons are exact (no epsilon): centers must be bit-for-bit equal to be
    /// concentric and circles are tangent only when the half chord squared is exactly zero.
    pub fn new(c1: Circle<T>, c2: Circle<T>) -> Self {
        let center_vector = c2.center() - c1.center();
        let center_distance = center_vector.length();

        let intr = if center_distance == T::zero() {
            // concentric, no radical line
            if c1.radius() == c2.radius() {
                CircleCircleIntr::Coincident
            } else {
                CircleCircleIntr::ConcentricContained
            }
        } else {
            eccentric_intr(&c1, &c2, center_vector, center_distance)
        };

        CircleCircleIntersection {
            c1,
            c2,
            center_distance,
            intr,
        }
    }

    #[inline]
    pub fn c1(&self) -> &Circle<T> {
        &self.c1
    }

    #[inline]
    pub fn c2(&self) -> &Circle<T> {
        &self.c2
    }

    /// Distance between the two circle centers.
    #[inline]
    pub fn center_distance(&self) -> T {
        self.center_distance
    }

    #[inline]
    pub fn intr(&self) -> &CircleCircleIntr<T> {
        &self.intr
    }

    #[inline]
    pub fn intersection_type(&self) -> IntersectionType {
        self.intr.intersection_type()
    }

    #[inline]
    pub fn radical_line(&self) -> Option<&RadicalLine<T>> {
        self.intr.radical_line()
    }

    #[inline]
    pub fn radical_point(&self) -> Option<Vector2<T>> {
        self.radical_line().map(|r| r.point)
    }

    /// Tangent point, `None` unless the circles are tangent.
    pub fn intersection_point(&self) -> Option<Vector2<T>> {
        match self.intr {
            CircleCircleIntr::InternallyTangent { point, .. }
            | CircleCircleIntr::ExternallyTangent { point, .. } => Some(point),
            _ => None,
        }
    }

    /// Both intersect points, `None` unless the circles are overlapping.
    pub fn intersection_point_pair(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        match self.intr {
            CircleCircleIntr::Overlapping { point1, point2, .. } => Some((point1, point2)),
            _ => None,
        }
    }

    /// Distance from the radical point to the intersect points, `None` unless the circles are
    /// overlapping.
    pub fn half_chord_length(&self) -> Option<T> {
        match self.intr {
            CircleCircleIntr::Overlapping { half_chord, .. } => Some(half_chord),
            _ => None,
        }
    }

    /// All intersect points, as many as
    /// [intersection_point_count](IntersectionType::intersection_point_count) reports.
    ///
    /// Returns [Error::CoincidentCircles] for coincident circles.
    pub fn intersection_points(&self) -> Result<Vec<Vector2<T>>> {
        use CircleCircleIntr::*;
        match self.intr {
            Coincident => Err(Error::CoincidentCircles),
            ConcentricContained | EccentricContained { .. } | Separate { .. } => Ok(Vec::new()),
            InternallyTangent { point, .. } | ExternallyTangent { point, .. } => Ok(vec![point]),
            Overlapping { point1, point2, .. } => Ok(vec![point1, point2]),
        }
    }
}

/// Finds the intersect between two circles, same as [CircleCircleIntersection::new].
#[inline]
pub fn circle_circle_intr<T>(c1: &Circle<T>, c2: &Circle<T>) -> CircleCircleIntersection<T>
where
    T: Real,
{
    CircleCircleIntersection::new(*c1, *c2)
}

fn eccentric_intr<T>(
    c1: &Circle<T>,
    c2: &Circle<T>,
    center_vector: Vector2<T>,
    center_distance: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    use CircleCircleIntr::*;

    let r1 = c1.radius();
    let r2 = c2.radius();

    let center_versor = center_vector.scale(T::one() / center_distance);
    let c1_distance =
        (center_distance * center_distance + r1 * r1 - r2 * r2) / (T::two() * center_distance);
    let radical = RadicalLine {
        point: c1.center() + center_versor.scale(c1_distance),
        c1_distance,
        c2_distance: center_distance - c1_distance,
        center_versor,
        versor: center_versor.rot_plus_90(),
    };

    // squared distance from radical point to the intersect points (right triangle with c1 center)
    let sq_h = r1 * r1 - c1_distance * c1_distance;
    if sq_h > T::zero() {
        let half_chord = sq_h.sqrt();
        return Overlapping {
            radical,
            point1: radical.point_at(half_chord),
            point2: radical.point_at(-half_chord),
            half_chord,
        };
    }

    let external = center_distance > r1.max(r2);
    if sq_h == T::zero() {
        let point = radical.point;
        if external {
            ExternallyTangent { radical, point }
        } else {
            InternallyTangent { radical, point }
        }
    } else if external {
        Separate { radical }
    } else {
        EccentricContained { radical }
    }
}

impl<T: Real> fmt::Display for CircleCircleIntersection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CircleCircleIntersection(c1: {}, c2: {}, type: {}, center_distance: {}",
            self.c1,
            self.c2,
            self.intersection_type(),
            self.center_distance
        )?;

        if let Some(radical) = self.radical_line() {
            write!(
                f,
                ", radical_point: {}, c1_distance: {}, c2_distance: {}, center_versor: {}, radical_versor: {}",
                radical.point,
                radical.c1_distance,
                radical.c2_distance,
                radical.center_versor,
                radical.versor
            )?;
        }

        if let Some(point) = self.intersection_point() {
            write!(f, ", intersection_point: {}", point)?;
        }

        if let CircleCircleIntr::Overlapping {
            point1,
            point2,
            half_chord,
            ..
        } = self.intr
        {
            write!(
                f,
                ", intersection_point1: {}, intersection_point2: {}, half_chord: {}",
                point1, point2, half_chord
            )?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::IntersectionType::*;
    use super::*;

    const ALL_TYPES: [IntersectionType; 7] = [
        Coincident,
        ConcentricContained,
        EccentricContained,
        InternallyTangent,
        Overlapping,
        ExternallyTangent,
        Separate,
    ];

    #[test]
    fn type_table() {
        // (count, concentric, contained, tangent, disjoint)
        let expected = [
            (-1, true, false, false, false),
            (0, true, true, false, false),
            (0, false, true, false, false),
            (1, false, false, true, false),
            (2, false, false, false, false),
            (1, false, false, true, false),
            (0, false, false, false, true),
        ];

        for (t, e) in ALL_TYPES.iter().zip(expected.iter()) {
            let actual = (
                t.intersection_point_count(),
                t.is_concentric(),
                t.is_contained(),
                t.is_tangent(),
                t.is_disjoint(),
            );
            assert_eq!(actual, *e, "type: {t}");
        }
    }

    #[test]
    fn from_radii_boundaries() {
        assert_eq!(IntersectionType::from_radii(1.0, 1.0, 0.0), Coincident);
        assert_eq!(IntersectionType::from_radii(1.0, 2.0, 0.0), ConcentricContained);
        assert_eq!(IntersectionType::from_radii(5.0, 1.0, 1.0), EccentricContained);
        assert_eq!(IntersectionType::from_radii(4.0, 3.0, 1.0), InternallyTangent);
        assert_eq!(IntersectionType::from_radii(3.0, 4.0, 1.0), InternallyTangent);
        assert_eq!(IntersectionType::from_radii(5.0, 5.0, 6.0), Overlapping);
        assert_eq!(IntersectionType::from_radii(1.0, 1.0, 2.0), ExternallyTangent);
        assert_eq!(IntersectionType::from_radii(1.0, 1.0, 10.0), Separate);
    }

    #[test]
    fn concentric_has_no_radical_line() {
        let c1 = Circle::new(Vector2::new(1.0, 1.0), 5.0).unwrap();
        let c2 = Circle::new(Vector2::new(1.0, 1.0), 2.0).unwrap();
        let intr = CircleCircleIntersection::new(c1, c2);
        assert_eq!(intr.intersection_type(), ConcentricContained);
        assert_eq!(intr.center_distance(), 0.0);
        assert!(intr.radical_line().is_none());
        assert!(intr.radical_point().is_none());
        assert!(intr.intersection_point().is_none());
        assert!(intr.intersection_point_pair().is_none());
        assert!(intr.half_chord_length().is_none());
    }

    #[test]
    fn display_lists_variant_fields() {
        let c1 = Circle::new(Vector2::new(0.0, 0.0), 1.0).unwrap();
        let c2 = Circle::new(Vector2::new(2.0, 0.0), 1.0).unwrap();
        let s = CircleCircleIntersection::new(c1, c2).to_string();
        assert!(s.starts_with(
            "CircleCircleIntersection(c1: Circle(c: Vector2(0, 0), r: 1), c2: Circle(c: Vector2(2, 0), r: 1), type: ExternallyTangent, center_distance: 2"
        ));
        assert!(s.contains("radical_point: Vector2(1, 0)"));
        assert!(s.contains("intersection_point: Vector2(1, 0)"));
        assert!(!s.contains("half_chord"));
        assert!(s.ends_with(')'));

        let s = CircleCircleIntersection::new(c1, c1).to_string();
        assert!(s.ends_with("type: Coincident, center_distance: 0)"));
    }
}
