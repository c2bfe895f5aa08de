use crate::config::ColumnOverrides;
use crate::model::CatalogError;

const HINT_EXACT: [&str; 2] = ["product name", "productname"];
// Misspellings seen in supplier sheets.
const HINT_CONTAINS: [&str; 3] = ["category", "catogary", "catagory"];

/// Which header holds which field. Only the description is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub hint: Option<usize>,
    pub description: usize,
    pub image_url: Option<usize>,
}

impl ColumnMap {
    /// Resolves the columns from explicit overrides, falling back to
    /// header-name matching. `target` is excluded from hint detection.
    pub fn detect(
        headers: &[String],
        overrides: &ColumnOverrides,
        target: &str,
    ) -> Result<Self, CatalogError> {
        let target_lower = target.to_lowercase();

        let hint = match &overrides.hint {
            Some(name) => Some(exact(headers, name)?),
            None => find(headers, |h| HINT_EXACT.contains(&h)).or_else(|| {
                find(headers, |h| {
                    h != target_lower && HINT_CONTAINS.iter().any(|k| h.contains(k))
                })
            }),
        };

        let description = match &overrides.description {
            Some(name) => exact(headers, name)?,
            None => find(headers, |h| h.contains("desc")).ok_or_else(|| {
                CatalogError::MissingColumn(format!(
                    "no description column among [{}]",
                    headers.join(", ")
                ))
            })?,
        };

        let image_url = match &overrides.image_url {
            Some(name) => Some(exact(headers, name)?),
            None => find(headers, |h| h.contains("image") && h.contains("url")),
        };

        Ok(Self {
            hint,
            description,
            image_url,
        })
    }
}

fn exact(headers: &[String], name: &str) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
}

fn find(headers: &[String], pred: impl Fn(&str) -> bool) -> Option<usize> {
    headers.iter().position(|h| pred(&h.to_lowercase()))
}
