// Debug tool to inspect classification, traversal order, and write reports
use qr_placer::{Grid, place_into, scan};
use std::env;

fn main() {
    let version: u8 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2);

    let mut grid = match Grid::for_version(version) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("cannot build grid: {}", err);
            return;
        }
    };

    println!(
        "Version {}: {}x{} modules, {} usable",
        version,
        grid.size(),
        grid.size(),
        grid.usable_count()
    );

    println!("\nCategory map (# reserved, F format, A alignment, . usable):");
    for y in 0..grid.size() {
        let row: String = (0..grid.size())
            .map(|x| grid.get(x, y).map(|c| c.category.tag()).unwrap_or('?'))
            .collect();
        println!("  {}", row);
    }

    let path = match scan(&grid) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("traversal failed: {}", err);
            return;
        }
    };

    println!("\nPath head (first 16 of {}):", path.len());
    for coord in path.iter().take(16) {
        println!("  ({:>3}, {:>3})", coord.x, coord.y);
    }

    let bits: Vec<bool> = (0..path.len()).map(|i| i % 2 == 0).collect();
    match place_into(&mut grid, &bits) {
        Ok(report) => println!(
            "\nWrite report: assigned={} dropped={} unfilled={}",
            report.assigned, report.dropped, report.unfilled
        ),
        Err(err) => eprintln!("write failed: {}", err),
    }
}
