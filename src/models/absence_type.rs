/// Kind of leave recorded in the sheet.
///
/// The variant order is also the display order of the report sub-blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbsenceType {
    Vacation,
    Sick,
    Other,
}

impl AbsenceType {
    /// Fixed display order used by the formatter.
    pub const DISPLAY_ORDER: [AbsenceType; 3] =
        [AbsenceType::Vacation, AbsenceType::Sick, AbsenceType::Other];

    /// Parse the label written in the sheet's type column.
    /// Case-insensitive, surrounding whitespace ignored.
    pub fn from_sheet_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vacation" => Some(Self::Vacation),
            "sick" => Some(Self::Sick),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Convert enum → sheet label
    pub fn sheet_label(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "Vacation",
            AbsenceType::Sick => "Sick",
            AbsenceType::Other => "Other",
        }
    }

    /// Label shown in the report sub-header.
    pub fn display_label(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "Vacation",
            AbsenceType::Sick => "Sick Leave",
            AbsenceType::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "🏖",
            AbsenceType::Sick => "🤒",
            AbsenceType::Other => "📋",
        }
    }

    pub fn is_vacation(&self) -> bool {
        matches!(self, AbsenceType::Vacation)
    }
}
