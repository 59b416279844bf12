//! Layout math for the donut SVG.
//!
//! Everything here is a pure function of the viewport size, the current
//! radius and, for icon placement, the measured size of rendered elements.

use std::f64::consts::{PI, TAU};

const EPSILON: f64 = 1e-12;

/// Render a number the way it should appear in an SVG attribute: integers
/// without a decimal point, everything else with at most three decimals.
pub fn fmt_num(value: f64) -> String {
    if value.abs() < 5e-4 {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Side of the square canvas: the smaller viewport dimension, height on a tie.
pub fn svg_bounds(viewport_width: f64, viewport_height: f64) -> f64 {
    if viewport_width < viewport_height {
        viewport_width
    } else {
        viewport_height
    }
}

pub fn radius(svg_bounds: f64) -> f64 {
    svg_bounds / 2.0
}

/// Label font size in pixels, e.g. `"72px"` for a radius of 360.
pub fn font_size(radius: f64) -> String {
    format!("{}px", fmt_num(radius / 5.0))
}

pub fn donut_view_box(svg_bounds: f64) -> String {
    let b = fmt_num(svg_bounds);
    format!("0 0 {} {}", b, b)
}

pub fn g_transform(radius: f64) -> String {
    let r = fmt_num(radius);
    format!("translate({},{})", r, r)
}

/// An annular sector starting at 12 o'clock and sweeping clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutArc {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl DonutArc {
    /// Ring for a donut of the given outer radius; the hole is half of it.
    pub fn for_radius(radius: f64) -> Self {
        DonutArc {
            inner_radius: radius / 2.0,
            outer_radius: radius,
        }
    }

    /// SVG path data for the sector from angle 0 to `end_angle` (radians).
    pub fn path(&self, end_angle: f64) -> String {
        let r0 = self.inner_radius.max(0.0);
        let r1 = self.outer_radius.max(0.0);
        let sweep = end_angle.abs().min(TAU);

        if r1 <= EPSILON {
            return "M0,0Z".to_string();
        }
        if sweep <= EPSILON {
            return format!("M0,{}Z", fmt_num(-r1));
        }

        // A single SVG arc cannot close on itself, so full turns take two halves.
        if sweep >= TAU - EPSILON {
            let mut d = format!(
                "M0,{ny}A{r},{r},0,1,1,0,{y}A{r},{r},0,1,1,0,{ny}",
                r = fmt_num(r1),
                y = fmt_num(r1),
                ny = fmt_num(-r1)
            );
            if r0 > EPSILON {
                d.push_str(&format!(
                    "M0,{ny}A{r},{r},0,1,0,0,{y}A{r},{r},0,1,0,0,{ny}",
                    r = fmt_num(r0),
                    y = fmt_num(r0),
                    ny = fmt_num(-r0)
                ));
            }
            d.push('Z');
            return d;
        }

        let large = if sweep > PI { 1 } else { 0 };
        let (sin, cos) = sweep.sin_cos();
        let mut d = format!(
            "M0,{}A{r},{r},0,{large},1,{},{}",
            fmt_num(-r1),
            fmt_num(r1 * sin),
            fmt_num(-r1 * cos),
            r = fmt_num(r1),
            large = large
        );
        if r0 > EPSILON {
            d.push_str(&format!(
                "L{},{}A{r},{r},0,{large},0,0,{}",
                fmt_num(r0 * sin),
                fmt_num(-r0 * cos),
                fmt_num(-r0),
                r = fmt_num(r0),
                large = large
            ));
        } else {
            d.push_str("L0,0");
        }
        d.push('Z');
        d
    }
}

/// Position of a rendered element, already formatted for SVG attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coords {
    pub x: String,
    pub y: String,
}

impl Coords {
    fn new(x: f64, y: f64) -> Self {
        Coords {
            x: fmt_num(x),
            y: fmt_num(y),
        }
    }
}

/// Centre the label horizontally and drop it a quarter of its height.
pub fn set_countdown_coords(radius: f64, text_height: f64) -> Coords {
    Coords::new(radius, radius + text_height / 4.0)
}

/// Reset icon sits left of centre, just below the label.
pub fn set_reset_coords(radius: f64, reset_width: f64, reset_height: f64) -> Coords {
    Coords::new(radius - reset_width, radius + reset_height / 1.5)
}

pub fn set_play_coords(radius: f64, play_height: f64) -> Coords {
    Coords::new(radius, radius + play_height / 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_smaller_dimension() {
        assert_eq!(svg_bounds(600.0, 500.0), 500.0);
        assert_eq!(svg_bounds(400.0, 800.0), 400.0);
        assert_eq!(svg_bounds(700.0, 700.0), 700.0);
    }

    #[test]
    fn derived_strings() {
        assert_eq!(radius(730.0), 365.0);
        assert_eq!(font_size(680.0), "136px");
        assert_eq!(font_size(360.0), "72px");
        assert_eq!(donut_view_box(730.0), "0 0 730 730");
        assert_eq!(g_transform(360.0), "translate(360,360)");
        assert_eq!(g_transform(365.5), "translate(365.5,365.5)");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333");
        assert_eq!(fmt_num(2.5), "2.5");
    }

    #[test]
    fn arc_radii_track_radius() {
        let arc = DonutArc::for_radius(360.0);
        assert_eq!(arc.inner_radius, 180.0);
        assert_eq!(arc.outer_radius, 360.0);
    }

    #[test]
    fn empty_sweep_is_degenerate() {
        assert_eq!(DonutArc::for_radius(360.0).path(0.0), "M0,-360Z");
    }

    #[test]
    fn quarter_sweep() {
        let d = DonutArc::for_radius(360.0).path(TAU / 4.0);
        assert_eq!(d, "M0,-360A360,360,0,0,1,360,0L180,0A180,180,0,0,0,0,-180Z");
    }

    #[test]
    fn large_sweep_sets_flag() {
        let d = DonutArc::for_radius(100.0).path(PI * 1.5);
        assert_eq!(d, "M0,-100A100,100,0,1,1,-100,0L-50,0A50,50,0,1,0,0,-50Z");
    }

    #[test]
    fn full_sweep_draws_ring() {
        let d = DonutArc::for_radius(100.0).path(TAU);
        assert_eq!(
            d,
            "M0,-100A100,100,0,1,1,0,100A100,100,0,1,1,0,-100\
             M0,-50A50,50,0,1,0,0,50A50,50,0,1,0,0,-50Z"
        );
    }

    #[test]
    fn icon_coordinates() {
        assert_eq!(
            set_countdown_coords(360.0, 80.0),
            Coords {
                x: "360".into(),
                y: "380".into()
            }
        );
        assert_eq!(
            set_reset_coords(360.0, 72.0, 72.0),
            Coords {
                x: "288".into(),
                y: "408".into()
            }
        );
        assert_eq!(
            set_play_coords(360.0, 72.0),
            Coords {
                x: "360".into(),
                y: "408".into()
            }
        );
    }
}
