use crate::{Position, Rover};

/// The most cells drawn along either axis.
pub const MAX_DRAWN_SIDE: i64 = 64;

/// Draws the grid around the rover as text.
///
/// The rover is drawn as an arrow in the direction it faces, obstacles as
/// `#`. Bounded grids are drawn in full, unbounded grids only as far as
/// needed to show the rover and every obstacle. North is up.
///
/// At most [`MAX_DRAWN_SIDE`] cells are drawn along each axis. Larger areas
/// are cut down to a window around the rover.
pub fn visualize(rover: &Rover<'_>) -> String {
    let grid = rover.grid();
    let (x_min, y_min, x_max, y_max) = match grid.bounds() {
        Some(bounds) => (0, 0, bounds.x_limit() - 1, bounds.y_limit() - 1),
        None => {
            let start = rover.position();
            grid.obstacles().iter().fold(
                (start.x, start.y, start.x, start.y),
                |(x_min, y_min, x_max, y_max), p| {
                    (x_min.min(p.x), y_min.min(p.y), x_max.max(p.x), y_max.max(p.y))
                },
            )
        }
    };
    let (x_min, x_max) = clip(x_min, x_max, rover.position().x);
    let (y_min, y_max) = clip(y_min, y_max, rover.position().y);

    // Draw the top of the box
    let mut result = format!("    {:>2}", x_min);
    result += "\n    ╭";
    for _ in x_min..=x_max {
        result += "──";
    }
    result += "╮\n";

    for y in (y_min..=y_max).rev() {
        result += &format!("{:>3} │", y);
        for x in x_min..=x_max {
            let position = Position::new(x, y);
            let glyph = if position == rover.position() {
                rover.heading().arrow()
            } else if grid.is_blocked(position) {
                '#'
            } else {
                '·'
            };
            result.push(glyph);
            result.push(' ');
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in x_min..=x_max {
        result += "──";
    }
    result += "╯";
    result
}

/// Narrows `min..=max` to at most `MAX_DRAWN_SIDE` values, keeping `center`
/// inside.
fn clip(min: i64, max: i64, center: i64) -> (i64, i64) {
    if max.saturating_sub(min) < MAX_DRAWN_SIDE {
        return (min, max);
    }
    let lo = center
        .saturating_sub(MAX_DRAWN_SIDE / 2)
        .clamp(min, max - MAX_DRAWN_SIDE + 1);
    (lo, lo + MAX_DRAWN_SIDE - 1)
}
