#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ProvisionedRoleArn(String);

impl ProvisionedRoleArn {
    pub fn new(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();
        if !trimmed.starts_with("arn:") || trimmed.split(':').count() < 6 {
            return Err("role arn must be a fully qualified arn".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }
}
