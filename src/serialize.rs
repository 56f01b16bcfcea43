use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes a slice of points as a sequence of `{"x": .., "y": ..}` objects, for use with
/// `#[serde(serialize_with = "point_list")]`
pub fn point_list<S: Serializer>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Entry(#[serde(with = "Point2f64")] Point2<f64>);

    serializer.collect_seq(points.iter().map(|p| Entry(*p)))
}
