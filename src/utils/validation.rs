use crate::utils::error::{ListError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_ordered_range(field_name: &str, start: usize, end: usize) -> Result<()> {
    if start > end {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: "Start must not be greater than end".to_string(),
        });
    }
    Ok(())
}

pub fn validate_right_angle(field_name: &str, degrees: u32) -> Result<()> {
    if degrees % 90 != 0 || degrees >= 360 {
        return Err(ListError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: degrees.to_string(),
            reason: "Rotation must be one of 0, 90, 180, 270".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ListError::MissingConfigError {
        field: field_name.to_string(),
    })
}
