mod common;

use coinscan::report::{Report, count_line, metric_lines, write_json, write_report};
use common::*;
use image::RgbImage;

fn metrics(index: usize, area: f64, perimeter: f64, centroid: Option<Centroid>) -> ContourMetrics {
    ContourMetrics {
        index,
        area,
        perimeter,
        moments: Moments::default(),
        centroid,
    }
}

fn analysis_with(contour_count: usize, metrics: Vec<ContourMetrics>) -> Analysis {
    let contours = (0..contour_count)
        .map(|i| Contour::new(i, rect_points(0, 0, 4, 4)))
        .collect();
    Analysis {
        contours,
        metrics,
        outlines: RgbImage::new(4, 4),
        centroids: RgbImage::new(4, 4),
    }
}

#[test]
fn test_line_formats() {
    assert_eq!(count_line(5), "I count 5 coins in this image");

    let lines = metric_lines(&metrics(0, 100.0, 40.5, Some(Centroid { x: 12, y: 7 })));
    assert_eq!(lines[0], "Area 100.0");
    assert_eq!(lines[1], "perimeter 40.5");
    assert_eq!(lines[2], "the center point 12 7");

    let lines = metric_lines(&metrics(1, 12.5, 14.242640687119286, None));
    assert_eq!(lines[0], "Area 12.5");
    assert_eq!(lines[1], "perimeter 14.242640687119286");
    assert_eq!(lines[2], "the center point degenerate");
}

#[test]
fn test_report_order() {
    let analysis = analysis_with(
        3,
        vec![
            metrics(0, 20.0, 18.0, Some(Centroid { x: 1, y: 2 })),
            metrics(2, 36.0, 24.0, Some(Centroid { x: 3, y: 4 })),
        ],
    );

    let mut out = Vec::new();
    write_report(&mut out, &analysis).unwrap();
    let expected = "I count 3 coins in this image\n\
                    Area 20.0\n\
                    perimeter 18.0\n\
                    the center point 1 2\n\
                    Area 36.0\n\
                    perimeter 24.0\n\
                    the center point 3 4\n";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    assert_eq!(analysis.skipped(), 1);
}

#[test]
fn test_json_report() {
    let analysis = analysis_with(
        2,
        vec![
            metrics(0, 20.0, 18.0, Some(Centroid { x: 1, y: 2 })),
            metrics(1, 0.0, 8.0, None),
        ],
    );
    assert_eq!(analysis.degenerate().count(), 1);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    write_json(&path, &analysis).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["contours"][0]["area"], 20.0);
    assert_eq!(value["contours"][0]["centroid"]["x"], 1);
    assert_eq!(value["contours"][0]["centroid"]["y"], 2);
    assert!(value["contours"][1]["centroid"].is_null());
    assert!(value["contours"][0].get("moments").is_none());

    let report = Report::from(&analysis);
    assert_eq!(report.count, 2);
    assert_eq!(report.contours.len(), 2);
}
