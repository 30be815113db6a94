//! External contour extraction
//!
//! Finds connected ink regions in the binary mask (8-way connectivity)
//! and traces each region's outer boundary with Moore neighbor tracing.
//! Only external contours are reported: a stroke with an internal hole
//! is one filled region, and the hole's boundary is never emitted.
//!
//! Contours come out in mask scan order, not left-to-right; callers must
//! not assume any cross-stroke ordering.

use inkline_core::{BinaryMask, Rect};

/// One connected ink region: its outer boundary polygon, bounding
/// rectangle, and pixel population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    /// Closed outer boundary, ordered clockwise from the region's
    /// topmost-leftmost pixel
    pub contour: Vec<(usize, usize)>,
    /// Tight bounding rectangle of the region
    pub bounds: Rect,
    /// Number of foreground pixels in the region
    pub pixel_count: usize,
}

/// Clockwise 8-neighborhood starting West.
const DIRS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Extract external contours of all connected components in the mask.
///
/// Returns one [`Stroke`] per 8-connected foreground region. An
/// all-background mask yields an empty vector; the caller decides
/// whether that is an error.
pub fn find_strokes(mask: &BinaryMask) -> Vec<Stroke> {
    let w = mask.width();
    let h = mask.height();
    let mut labels = vec![0u32; w * h];
    let mut strokes = Vec::new();
    let mut next_label = 1u32;

    for y in 0..h {
        for x in 0..w {
            if !mask.is_ink(x, y) || labels[y * w + x] != 0 {
                continue;
            }

            // Flood-fill this component; the scan-order seed is its
            // topmost-leftmost pixel, the Moore trace anchor.
            let label = next_label;
            next_label += 1;
            let (bounds, pixel_count) = flood_fill(mask, &mut labels, label, x, y);
            let contour = trace_boundary(&labels, w, h, label, (x, y), pixel_count);

            strokes.push(Stroke {
                contour,
                bounds,
                pixel_count,
            });
        }
    }

    strokes
}

fn flood_fill(
    mask: &BinaryMask,
    labels: &mut [u32],
    label: u32,
    seed_x: usize,
    seed_y: usize,
) -> (Rect, usize) {
    let w = mask.width();
    let h = mask.height();
    let mut stack = vec![(seed_x, seed_y)];
    labels[seed_y * w + seed_x] = label;

    let (mut min_x, mut max_x) = (seed_x, seed_x);
    let (mut min_y, mut max_y) = (seed_y, seed_y);
    let mut count = 0usize;

    while let Some((x, y)) = stack.pop() {
        count += 1;
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);

        for (dx, dy) in DIRS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if mask.is_ink(nx, ny) && labels[ny * w + nx] == 0 {
                labels[ny * w + nx] = label;
                stack.push((nx, ny));
            }
        }
    }

    (
        Rect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1),
        count,
    )
}

/// Moore neighbor tracing with Jacob's stopping criterion.
///
/// `start` must be the component's topmost-leftmost pixel, so the
/// neighbor to its West is guaranteed background (or off-image) and
/// serves as the initial backtrack point.
fn trace_boundary(
    labels: &[u32],
    w: usize,
    h: usize,
    label: u32,
    start: (usize, usize),
    pixel_count: usize,
) -> Vec<(usize, usize)> {
    let at = |x: i32, y: i32| -> bool {
        x >= 0 && y >= 0 && x < w as i32 && y < h as i32 && labels[y as usize * w + x as usize] == label
    };

    let start_i = (start.0 as i32, start.1 as i32);
    let initial_back = (start_i.0 - 1, start_i.1);

    let mut contour = vec![start];
    let mut cur = start_i;
    let mut back = initial_back;

    // Worst case visits each boundary pixel from every direction.
    let cap = 8 * pixel_count + 8;
    for _ in 0..cap {
        // Index of the backtrack direction relative to `cur`
        let back_dir = DIRS
            .iter()
            .position(|&(dx, dy)| (cur.0 + dx, cur.1 + dy) == back)
            .unwrap_or(0);

        let mut advanced = false;
        for k in 1..=8 {
            let d = (back_dir + k) % 8;
            let nx = cur.0 + DIRS[d].0;
            let ny = cur.1 + DIRS[d].1;
            if at(nx, ny) {
                // Backtrack becomes the last background neighbor scanned
                let prev = (back_dir + k - 1) % 8;
                back = (cur.0 + DIRS[prev].0, cur.1 + DIRS[prev].1);
                cur = (nx, ny);
                advanced = true;
                break;
            }
        }

        if !advanced {
            // Isolated pixel
            break;
        }
        if cur == start_i && back == initial_back {
            // Returned to the start from the original entry direction
            break;
        }
        contour.push((cur.0 as usize, cur.1 as usize));
    }

    contour
}
