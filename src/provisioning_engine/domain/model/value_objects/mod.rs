pub mod provisioned_role_arn;
