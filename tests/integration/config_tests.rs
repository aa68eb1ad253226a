//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, UserFactory};
    use missions_permissions::config::{Config, load_requests};
    use missions_permissions::{
        PermissionAction, PermissionEvaluator, PermissionResource, PermissionsError,
    };

    #[tokio::test]
    async fn test_load_sample_config() {
        let (_dir, path) = ConfigFactory::write("permissions.yaml", ConfigFactory::SAMPLE);

        let config = Config::from_file(&path).await.unwrap();
        let permissions = config.permissions();
        assert_eq!(permissions.account_domains, vec!["company.com", "corp.example"]);
        assert_eq!(permissions.custom_roles.len(), 2);
        assert_eq!(permissions.logging.level, "debug");
    }

    #[tokio::test]
    async fn test_evaluator_seeded_from_config() {
        let (_dir, path) = ConfigFactory::write("permissions.yaml", ConfigFactory::SAMPLE);
        let config = Config::from_file(&path).await.unwrap();

        let evaluator = PermissionEvaluator::from_config(&config.permissions);
        assert_eq!(evaluator.get_all_custom_roles().len(), 2);

        let role = evaluator.find_custom_role("no-boards").unwrap();
        let member = UserFactory::member_with_role(&role.id);
        let result = evaluator.can_user(
            &member,
            &PermissionAction::Create,
            &PermissionResource::Board,
            None,
        );
        assert!(!result.allowed);

        let inviter = evaluator.find_custom_role("quiet-inviter").unwrap();
        assert!(inviter.is_active);
        let member = UserFactory::member_with_role(&inviter.id);
        assert!(
            !evaluator
                .can_user(&member, &PermissionAction::Create, &PermissionResource::User, None)
                .allowed
        );
    }

    #[tokio::test]
    async fn test_guest_eligibility_uses_configured_domains() {
        let (_dir, path) = ConfigFactory::write("permissions.yaml", ConfigFactory::SAMPLE);
        let config = Config::from_file(&path).await.unwrap();
        let evaluator = PermissionEvaluator::from_config(&config.permissions);
        let domains = config.permissions.account_domains.as_slice();

        assert!(!evaluator.can_be_guest("alice@company.com", domains));
        assert!(!evaluator.can_be_guest("bob@corp.example", domains));
        assert!(evaluator.can_be_guest("bob@CORP.example", domains));
        assert!(evaluator.can_be_guest("carol@partner.io", domains));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(PermissionsError::Config(_))));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_rejected() {
        let (_dir, path) = ConfigFactory::write("broken.yaml", "account_domains: [unclosed");
        let result = Config::from_file(&path).await;
        assert!(matches!(result, Err(PermissionsError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let yaml = "custom_roles:\n  - name: dup\n  - name: dup\n";
        let (_dir, path) = ConfigFactory::write("dup.yaml", yaml);

        let result = Config::from_file(&path).await;
        match result {
            Err(PermissionsError::Validation(msg)) => assert!(msg.contains("dup")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_env_overrides_apply_over_file() {
        let (_dir, path) = ConfigFactory::write("permissions.yaml", ConfigFactory::SAMPLE);
        let config = Config::from_file(&path)
            .await
            .unwrap()
            .with_env_overrides(|key| match key {
                "PERMISSIONS_ACCOUNT_DOMAINS" => Some("other.org".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.permissions.account_domains, vec!["other.org"]);
        assert_eq!(config.permissions.custom_roles.len(), 2);
    }

    #[tokio::test]
    async fn test_load_requests_yaml_and_json() {
        let (_yaml_dir, yaml_path) = ConfigFactory::write(
            "checks.yaml",
            "- { action: create, resource: board }\n- { action: read, resource: team, resourceId: t-1 }\n",
        );
        let requests = load_requests(&yaml_path).await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].key(), "read:team:t-1");

        let (_json_dir, json_path) = ConfigFactory::write(
            "checks.json",
            r#"[{"action": "manage_billing", "resource": "account"}]"#,
        );
        let requests = load_requests(&json_path).await.unwrap();
        assert_eq!(requests[0].action, PermissionAction::ManageBilling);
        assert_eq!(requests[0].resource, PermissionResource::Account);

        let (_bad_dir, bad_path) = ConfigFactory::write("checks.json", "[{");
        assert!(matches!(
            load_requests(&bad_path).await,
            Err(PermissionsError::Serialization(_))
        ));
    }
}
