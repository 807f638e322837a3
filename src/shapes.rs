//! Shape rasterization primitives.
//!
//! Each function converts a geometric shape into the set of integer pixel
//! coordinates it covers. Coordinates may fall outside any canvas;
//! [`fill_pixels`] clips them when painting.

use image::{ImageBuffer, Pixel};
use std::collections::HashSet;

/// Rasterize a line using Bresenham's line algorithm.
///
/// Returns all pixels that form a line between two points, endpoints included.
///
/// # Examples
///
/// ```
/// use cardart::shapes::rasterize_line;
///
/// let pixels = rasterize_line((0, 0), (3, 3));
/// assert_eq!(pixels.len(), 4);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 3)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize a stroked rectangle (outline only).
///
/// The rectangle spans `w` x `h` pixels from its top-left corner (x, y);
/// the stroke grows inward by `thickness` pixels.
///
/// # Examples
///
/// ```
/// use cardart::shapes::rasterize_stroke;
///
/// let pixels = rasterize_stroke(0, 0, 4, 4, 1);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 0)));
/// assert!(!pixels.contains(&(1, 1))); // Interior should be empty
/// ```
pub fn rasterize_stroke(x: i32, y: i32, w: i32, h: i32, thickness: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if w <= 0 || h <= 0 || thickness <= 0 {
        return pixels;
    }

    // Top and bottom edges
    for dx in 0..w {
        for t in 0..thickness.min(h) {
            pixels.insert((x + dx, y + t));
            pixels.insert((x + dx, y + h - 1 - t));
        }
    }

    // Left and right edges
    for dy in 0..h {
        for t in 0..thickness.min(w) {
            pixels.insert((x + t, y + dy));
            pixels.insert((x + w - 1 - t, y + dy));
        }
    }

    pixels
}

/// Rasterize a filled circle.
///
/// Covers every pixel whose offset from the center (cx, cy) is within
/// `radius`, so the circle spans `2 * radius + 1` pixels across.
///
/// # Examples
///
/// ```
/// use cardart::shapes::rasterize_circle;
///
/// let pixels = rasterize_circle(5, 5, 2);
/// assert!(pixels.contains(&(5, 5)));
/// assert!(pixels.contains(&(7, 5)));
/// assert!(!pixels.contains(&(7, 7)));
/// ```
pub fn rasterize_circle(cx: i32, cy: i32, radius: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if radius < 0 {
        return pixels;
    }

    let r_sq = radius as i64 * radius as i64;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if (dx as i64 * dx as i64) + (dy as i64 * dy as i64) <= r_sq {
                pixels.insert((cx + dx, cy + dy));
            }
        }
    }

    pixels
}

/// Rasterize a circular ring (unfilled circle with a stroke).
///
/// The stroke lies inside `radius` and is `thickness` pixels wide.
///
/// # Examples
///
/// ```
/// use cardart::shapes::rasterize_ring;
///
/// let pixels = rasterize_ring(10, 10, 6, 2);
/// assert!(pixels.contains(&(16, 10)));
/// assert!(!pixels.contains(&(10, 10)));
/// ```
pub fn rasterize_ring(cx: i32, cy: i32, radius: i32, thickness: i32) -> HashSet<(i32, i32)> {
    if thickness <= 0 {
        return HashSet::new();
    }

    let outer = rasterize_circle(cx, cy, radius);
    let inner_radius = radius - thickness;
    if inner_radius < 0 {
        return outer;
    }

    let inner = rasterize_circle(cx, cy, inner_radius);
    outer.difference(&inner).copied().collect()
}

/// Rasterize a filled polygon using scanline fill.
///
/// Each row is sampled through pixel centers with an even-odd rule. A pixel
/// is covered when its center lies inside the outline or exactly on it, and
/// concave outlines such as stars fill correctly.
///
/// # Examples
///
/// ```
/// use cardart::shapes::rasterize_polygon;
///
/// let square = vec![(0, 0), (4, 0), (4, 4), (0, 4)];
/// let pixels = rasterize_polygon(&square);
/// assert_eq!(pixels.len(), 16);
/// assert!(pixels.contains(&(3, 3)));
/// ```
pub fn rasterize_polygon(vertices: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if vertices.len() < 3 {
        return pixels;
    }

    let min_y = vertices.iter().map(|(_, y)| *y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|(_, y)| *y).max().unwrap_or(0);

    for y in min_y..max_y {
        let scan = y as f64 + 0.5;
        let mut intersections = Vec::new();

        for i in 0..vertices.len() {
            let j = (i + 1) % vertices.len();
            let (x1, y1) = (vertices[i].0 as f64, vertices[i].1 as f64);
            let (x2, y2) = (vertices[j].0 as f64, vertices[j].1 as f64);

            // Half-open crossing test skips horizontal edges and counts
            // shared vertices once
            if (y1 <= scan) != (y2 <= scan) {
                intersections.push(x1 + (scan - y1) * (x2 - x1) / (y2 - y1));
            }
        }

        intersections.sort_by(|a, b| a.total_cmp(b));

        for chunk in intersections.chunks(2) {
            if let [start, end] = chunk {
                let first = (start - 0.5).ceil() as i32;
                let last = (end - 0.5).floor() as i32;
                for x in first..=last {
                    pixels.insert((x, y));
                }
            }
        }
    }

    pixels
}

/// Paint a pixel set onto an image with a solid color, overwriting.
///
/// Coordinates outside the image are ignored.
pub fn fill_pixels<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    pixels: &HashSet<(i32, i32)>,
    color: P,
) {
    let (w, h) = img.dimensions();
    for &(x, y) in pixels {
        if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
