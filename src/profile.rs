use crate::error::Error;

/// Spacing and size constants for one paper size. All lengths are in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryProfile {
    pub name: &'static str,
    pub page_width: f32,
    pub page_height: f32,
    pub grid_size: f32,
    pub grid_spacing: f32,
    pub grid_count_per_line: usize,
    pub margin_top: f32,
    pub margin_left: f32,
    pub row_margin: f32,
    pub character_size: f32,
    pub hint_size: f32,
    pub hint_spacing: f32,
    pub hint_margin: f32,
    /// Calibration shift applied to every hint glyph, leftwards. Zero when
    /// the overlay transform already centers its content in the hint slot.
    pub hint_x_correction: f32,
    pub rows_per_page_with_hint: usize,
    pub rows_per_page_without_hint: usize,
}

const A6: GeometryProfile = GeometryProfile {
    name: "a6",
    page_width: 297.64,
    page_height: 419.53,
    grid_size: 35.0,
    grid_spacing: 4.0,
    grid_count_per_line: 7,
    margin_top: 25.0,
    margin_left: 10.0,
    row_margin: 6.0,
    character_size: 35.0,
    hint_size: 10.0,
    hint_spacing: 1.0,
    hint_margin: 4.0,
    hint_x_correction: 0.0,
    rows_per_page_with_hint: 7,
    rows_per_page_without_hint: 9,
};

const A5: GeometryProfile = GeometryProfile {
    name: "a5",
    page_width: 419.53,
    page_height: 595.28,
    grid_size: 50.0,
    grid_spacing: 5.0,
    grid_count_per_line: 7,
    margin_top: 35.0,
    margin_left: 20.0,
    row_margin: 8.0,
    character_size: 50.0,
    hint_size: 14.0,
    hint_spacing: 1.5,
    hint_margin: 6.0,
    hint_x_correction: 0.0,
    rows_per_page_with_hint: 6,
    rows_per_page_without_hint: 9,
};

const A4: GeometryProfile = GeometryProfile {
    name: "a4",
    page_width: 595.28,
    page_height: 841.89,
    grid_size: 50.0,
    grid_spacing: 5.0,
    grid_count_per_line: 10,
    margin_top: 40.0,
    margin_left: 25.0,
    row_margin: 8.0,
    character_size: 50.0,
    hint_size: 14.0,
    hint_spacing: 1.5,
    hint_margin: 6.0,
    hint_x_correction: 0.0,
    rows_per_page_with_hint: 9,
    rows_per_page_without_hint: 13,
};

const LETTER: GeometryProfile = GeometryProfile {
    name: "letter",
    page_width: 612.0,
    page_height: 792.0,
    grid_size: 50.0,
    grid_spacing: 5.0,
    grid_count_per_line: 10,
    margin_top: 40.0,
    margin_left: 33.0,
    row_margin: 8.0,
    character_size: 50.0,
    hint_size: 14.0,
    hint_spacing: 1.5,
    hint_margin: 6.0,
    hint_x_correction: 0.0,
    rows_per_page_with_hint: 9,
    rows_per_page_without_hint: 12,
};

pub const BUILTIN_PROFILES: [GeometryProfile; 4] = [A6, A5, A4, LETTER];

impl GeometryProfile {
    /// Resolves a built-in profile by name, ignoring case.
    pub fn lookup(name: &str) -> Result<GeometryProfile, Error> {
        let wanted = name.trim().to_ascii_lowercase();
        let profile = BUILTIN_PROFILES
            .iter()
            .find(|p| p.name == wanted)
            .copied()
            .ok_or_else(|| Error::UnknownProfile {
                name: name.to_string(),
                available: Self::names().join(", "),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn names() -> Vec<&'static str> {
        BUILTIN_PROFILES.iter().map(|p| p.name).collect()
    }

    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |msg: String| Err(Error::InvalidProfile(self.name.to_string(), msg));

        if self.grid_count_per_line == 0 {
            return invalid("grid_count_per_line must be at least 1".into());
        }
        if self.rows_per_page_with_hint == 0 || self.rows_per_page_without_hint == 0 {
            return invalid("rows per page must be at least 1".into());
        }
        let sizes = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("grid_size", self.grid_size),
            ("grid_spacing", self.grid_spacing),
            ("margin_top", self.margin_top),
            ("margin_left", self.margin_left),
            ("row_margin", self.row_margin),
            ("character_size", self.character_size),
            ("hint_size", self.hint_size),
            ("hint_spacing", self.hint_spacing),
            ("hint_margin", self.hint_margin),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{field} must be a positive length, got {value}"));
            }
        }
        if !self.hint_x_correction.is_finite() {
            return invalid("hint_x_correction must be finite".into());
        }
        Ok(())
    }

    pub fn rows_per_page(&self, hints: bool) -> usize {
        if hints {
            self.rows_per_page_with_hint
        } else {
            self.rows_per_page_without_hint
        }
    }

    /// Horizontal distance between the left edges of adjacent cells.
    pub fn cell_step(&self) -> f32 {
        self.grid_size + self.grid_spacing
    }

    /// Vertical band reserved above each row for its hint strip.
    pub fn hint_band(&self) -> f32 {
        self.hint_margin + self.hint_size
    }
}
