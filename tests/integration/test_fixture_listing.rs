//! Listing the Go fixtures through the library API.

use anyhow::Result;
use gosig::config::WalkConfig;
use gosig::{PackageLoader, collect_package_signatures, collect_signatures};
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/go/shapes")
}

fn loader(recursive: bool, include_tests: bool) -> PackageLoader {
    PackageLoader::new(WalkConfig {
        recursive,
        include_tests,
        parallel_threads: 2,
    })
}

const SHAPES_SIGNATURES: &[&str] = &[
    // point.go
    "func NewPoint(x, y int) *Point",
    "func (p Point) String() string",
    "func (p *Point) Translate(dx, dy int) ",
    "func (p *Point) WriteTo(w io.Writer) n int64, err error",
    // shapes.go
    "func Bounds(points ...Point) min, max Point",
    "func ( *Polygon) Sides() int",
    "func Grid(cells [Size][2]byte, labels []string) [3]int",
    "func Histogram(buckets [geom.Buckets]int) []int",
    "func Index(shapes map_type, done channel_type) function_type",
    "func Largest(items []S) S",
];

#[test]
fn test_lists_fixture_package_in_document_order() -> Result<()> {
    let packages = loader(false, true).load(&fixture_dir())?;

    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].name, "shapes");
    assert_eq!(packages[0].files.len(), 3);

    let mut expected: Vec<&str> = SHAPES_SIGNATURES.to_vec();
    expected.push("func TestBounds(t *testing.T) ");
    assert_eq!(collect_package_signatures(&packages[0]), expected);
    Ok(())
}

#[test]
fn test_without_test_files() -> Result<()> {
    let packages = loader(false, false).load(&fixture_dir())?;

    assert_eq!(collect_signatures(&packages), SHAPES_SIGNATURES);
    Ok(())
}

#[test]
fn test_recursive_lists_nested_package_first() -> Result<()> {
    let packages = loader(true, false).load(&fixture_dir())?;

    let names: Vec<_> = packages.iter().map(|p| p.name.as_str()).collect();
    // ".../shapes" sorts before ".../shapes/internal/geom"
    assert_eq!(names, vec!["shapes", "geom"]);

    let lines = collect_signatures(&packages);
    assert_eq!(
        lines.last().map(String::as_str),
        Some("func Distance(a, b [2]float64) float64")
    );
    assert_eq!(lines.len(), SHAPES_SIGNATURES.len() + 1);
    Ok(())
}

#[test]
fn test_no_unexported_names_in_listing() -> Result<()> {
    let packages = loader(true, true).load(&fixture_dir())?;

    for line in collect_signatures(&packages) {
        for hidden in ["normalize", "area", "helperForTests"] {
            assert!(!line.contains(hidden), "unexpected {hidden} in {line}");
        }
    }
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let first = collect_signatures(&loader(true, true).load(&fixture_dir())?);
    for threads in [1, 3, 8] {
        let packages = PackageLoader::new(WalkConfig {
            recursive: true,
            include_tests: true,
            parallel_threads: threads,
        })
        .load(&fixture_dir())?;
        assert_eq!(collect_signatures(&packages), first);
    }
    Ok(())
}
