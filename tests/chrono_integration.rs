use chrono::{DateTime, TimeZone, Utc};
use spenn::{Extent, Field, FieldLookup, PointSnap, ScreenPoint, Snap};

#[derive(Debug, Clone, Copy)]
struct Observation {
    date: DateTime<Utc>,
    value: f64,
}

impl FieldLookup<DateTime<Utc>> for Observation {
    fn field(&self, name: &str) -> Option<DateTime<Utc>> {
        (name == "date").then_some(self.date)
    }
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 1, d, 0, 0, 0).unwrap()
}

fn observations(days: &[u32]) -> Vec<Observation> {
    days.iter()
        .map(|&d| Observation {
            date: day(d),
            value: d as f64,
        })
        .collect()
}

fn dates() -> Extent<Observation, DateTime<Utc>> {
    Extent::new().field(Field::named("date"))
}

#[test]
fn test_pads_dates_symmetrically() {
    let data = observations(&[10, 20]);

    // A 10-day range padded by 1.0 gains 5 days on each side.
    let domain = dates().pad(1.0).compute(&data);
    assert_eq!(domain, Some((day(5), day(25))));
}

#[test]
fn test_pads_dates_asymmetrically() {
    let data = observations(&[10, 20]);

    let domain = dates().pad_each(0.6, 0.5).compute(&data);
    assert_eq!(domain, Some((day(4), day(25))));
}

#[test]
fn test_symmetry_about_a_date() {
    let data = observations(&[10, 20]);

    let domain = dates().symmetrical_about(day(14)).compute(&data);
    assert_eq!(domain, Some((day(8), day(20))));
}

#[test]
fn test_includes_dates() {
    let data = observations(&[10, 20]);

    let domain = dates().include(day(30)).compute(&data);
    assert_eq!(domain, Some((day(10), day(30))));

    let domain = dates().include(day(15)).compute(&data);
    assert_eq!(domain, Some((day(10), day(20))));

    let domain = dates().include(day(1)).compute(&data);
    assert_eq!(domain, Some((day(1), day(20))));
}

#[test]
fn test_empty_temporal_dataset_yields_none() {
    let data: Vec<Observation> = Vec::new();
    assert_eq!(dates().pad(2.0).compute(&data), None);
}

#[test]
fn test_snaps_to_the_nearest_timestamp() {
    let data = observations(&[10, 15, 20]);

    // One pixel per hour since the start of the month, value on a plain
    // linear vertical scale.
    let start = day(1);
    let snap = PointSnap::x_only(
        move |date: &DateTime<Utc>| (*date - start).num_hours() as f64,
        |value: &f64| 100.0 - value,
        |o: &Observation| o.date,
        |o: &Observation| o.value,
        &data,
    );

    // 2014-01-16 18:00 is closer to the 15th than to the 20th, however far
    // away the pointer sits vertically.
    let pointer_x = (Utc.with_ymd_and_hms(2014, 1, 16, 18, 0, 0).unwrap() - start).num_hours();
    let result = snap.snap(ScreenPoint::new(pointer_x as f64, -400.0));

    assert_eq!(result.datum.map(|o| o.date), Some(day(15)));
    assert_eq!(result.point.x, (day(15) - start).num_hours() as f64);
    assert_eq!(result.point.y, 85.0);
}
