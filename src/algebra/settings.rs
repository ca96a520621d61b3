use super::SettingsError;
use derive_builder::Builder;

/// Hard upper bound on the length of any [`Vector`](crate::algebra::Vector).
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Hard upper bound on the dimension of any [`Matrix`](crate::algebra::Matrix).
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Size limits enforced when containers are constructed.
///
/// The defaults are the hard limits [`MAX_VECTOR_SIZE`] and
/// [`MAX_MATRIX_SIZE`].  Tighter limits can be requested through the builder:
///
/// ```
/// use utmatrix::algebra::*;
///
/// let settings = ContainerSettingsBuilder::default()
///     .max_vector_size(16)
///     .build()
///     .unwrap();
/// assert!(Vector::<f64>::new_with_settings(17, 0, &settings).is_err());
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ContainerSettings {
    ///maximum number of elements in a vector
    #[builder(default = "MAX_VECTOR_SIZE")]
    pub max_vector_size: usize,

    ///maximum number of rows in a matrix
    #[builder(default = "MAX_MATRIX_SIZE")]
    pub max_matrix_size: usize,
}

impl Default for ContainerSettings {
    fn default() -> ContainerSettings {
        ContainerSettingsBuilder::default().build().unwrap()
    }
}

impl ContainerSettings {
    /// Checks that both limits are nonzero and no larger than the hard limits.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_limit("max_vector_size", self.max_vector_size, MAX_VECTOR_SIZE)?;
        validate_limit("max_matrix_size", self.max_matrix_size, MAX_MATRIX_SIZE)?;
        Ok(())
    }
}

impl ContainerSettingsBuilder {
    /// check that any limits specified are in range
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(n) = self.max_vector_size {
            validate_limit("max_vector_size", n, MAX_VECTOR_SIZE)?;
        }
        if let Some(n) = self.max_matrix_size {
            validate_limit("max_matrix_size", n, MAX_MATRIX_SIZE)?;
        }
        Ok(())
    }
}

impl From<SettingsError> for ContainerSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ContainerSettingsBuilderError::ValidationError(e.to_string())
    }
}

fn validate_limit(field: &'static str, value: usize, hard_max: usize) -> Result<(), SettingsError> {
    if value == 0 || value > hard_max {
        return Err(SettingsError::BadFieldValue(field));
    }
    Ok(())
}
