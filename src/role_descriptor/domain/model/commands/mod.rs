pub mod provision_cross_account_role_command;
