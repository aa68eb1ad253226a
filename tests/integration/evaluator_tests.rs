//! Permission evaluation integration tests

#[cfg(test)]
mod tests {
    use crate::common::{RoleFactory, UserFactory};
    use missions_permissions::{
        PermissionAction, PermissionCheckResult, PermissionEvaluator, PermissionRequest,
        PermissionResource, RestrictionLevel, UserType,
    };

    fn check(
        evaluator: &PermissionEvaluator,
        user: &missions_permissions::PermissionedUser,
        action: &str,
        resource: &str,
    ) -> PermissionCheckResult {
        evaluator.can_user(
            user,
            &PermissionAction::from(action),
            &PermissionResource::from(resource),
            None,
        )
    }

    // ==================== User Type Matrix ====================

    #[test]
    fn test_member_board_lifecycle() {
        let evaluator = PermissionEvaluator::new();
        let member = UserFactory::member();

        assert!(check(&evaluator, &member, "create", "board").allowed);
        assert!(check(&evaluator, &member, "read", "board").allowed);
        assert!(check(&evaluator, &member, "update", "board").allowed);
        assert!(check(&evaluator, &member, "export", "board").allowed);

        let result = check(&evaluator, &member, "delete", "board");
        assert!(!result.allowed);
        assert_eq!(
            result.reason.as_deref(),
            Some("User does not have permission to delete boards")
        );
        assert_eq!(result.restricted_by, Some(RestrictionLevel::Account));
        assert_eq!(result.required_user_type, None);
    }

    #[test]
    fn test_account_settings_escalate_to_admin() {
        let evaluator = PermissionEvaluator::new();

        for user in [UserFactory::member(), UserFactory::viewer(), UserFactory::guest()] {
            for action in ["manage_settings", "manage_billing", "manage_users"] {
                let result = check(&evaluator, &user, action, "account");
                assert!(!result.allowed, "{} should not {} account", user.user_type, action);
                assert_eq!(result.required_user_type, Some(UserType::AccountAdmin));
            }
        }

        let admin = UserFactory::admin();
        assert!(check(&evaluator, &admin, "manage_billing", "account").allowed);
    }

    #[test]
    fn test_viewer_and_guest_differ_on_board_update() {
        let evaluator = PermissionEvaluator::new();

        let viewer = check(&evaluator, &UserFactory::viewer(), "update", "board");
        assert!(!viewer.allowed);
        assert_eq!(viewer.reason.as_deref(), Some("Viewers cannot edit boards"));

        // Only viewers are singled out for board edits
        assert!(check(&evaluator, &UserFactory::guest(), "update", "board").allowed);
    }

    #[test]
    fn test_integrations_follow_app_rules() {
        let evaluator = PermissionEvaluator::new();
        let member = UserFactory::member();
        let guest = UserFactory::guest();

        for action in ["create", "read", "update", "delete"] {
            assert_eq!(
                check(&evaluator, &member, action, "app").allowed,
                check(&evaluator, &member, action, "integration").allowed,
            );
        }
        assert!(!check(&evaluator, &guest, "create", "integration").allowed);
        assert!(check(&evaluator, &guest, "read", "integration").allowed);
    }

    #[test]
    fn test_invalid_combinations_are_denied() {
        let evaluator = PermissionEvaluator::new();

        for user in UserFactory::all().into_iter().skip(1) {
            let result = check(&evaluator, &user, "share", "integration");
            assert!(!result.allowed);
            assert_eq!(
                result.reason.as_deref(),
                Some("Invalid action for integration resource")
            );

            let result = check(&evaluator, &user, "read", "dashboard");
            assert!(!result.allowed);
            assert_eq!(result.reason.as_deref(), Some("Unknown resource type: dashboard"));
            assert_eq!(result.restricted_by, None);
        }
    }

    #[test]
    fn test_admin_allowed_even_for_unknown_pairs() {
        let evaluator = PermissionEvaluator::new();
        let admin = UserFactory::admin();

        assert!(check(&evaluator, &admin, "share", "integration").allowed);
        assert!(check(&evaluator, &admin, "frobnicate", "dashboard").allowed);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let evaluator = PermissionEvaluator::new();
        let result = check(&evaluator, &UserFactory::member(), "manage_billing", "account");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["allowed"], false);
        assert_eq!(json["restrictedBy"], "account");
        assert_eq!(json["requiredUserType"], "account_admin");

        let allowed = serde_json::to_value(PermissionCheckResult::allow()).unwrap();
        assert_eq!(allowed, serde_json::json!({ "allowed": true }));
    }

    // ==================== Bulk Checks ====================

    #[test]
    fn test_bulk_check_for_restricted_member() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());
        let member = UserFactory::member_with_role(&role.id);

        let results = evaluator.can_user_multiple(
            &member,
            &[
                PermissionRequest::new("create", "board"),
                PermissionRequest::new("create", "workspace"),
                PermissionRequest::new("read", "board").with_resource_id("b-42"),
                PermissionRequest::new("delete", "team"),
            ],
        );

        assert_eq!(results.len(), 4);
        assert_eq!(results["create:board"], false);
        assert_eq!(results["create:workspace"], true);
        assert_eq!(results["read:board:b-42"], true);
        assert_eq!(results["delete:team"], false);
    }

    #[test]
    fn test_bulk_requests_deserialize_from_json() {
        let requests: Vec<PermissionRequest> = serde_json::from_str(
            r#"[
                {"action": "create", "resource": "team"},
                {"action": "read", "resource": "board", "resourceId": "b-1"}
            ]"#,
        )
        .unwrap();

        assert_eq!(requests[0].action, PermissionAction::Create);
        assert_eq!(requests[1].key(), "read:board:b-1");
    }

    // ==================== Composition ====================

    #[test]
    fn test_strictest_across_scopes() {
        let evaluator = PermissionEvaluator::new();
        let member = UserFactory::member();

        let account = check(&evaluator, &member, "create", "board");
        let board = PermissionCheckResult::deny("Board is locked");

        let combined = PermissionCheckResult::strictest([account, board]);
        assert!(!combined.allowed);
        assert_eq!(combined.reason.as_deref(), Some("Board is locked"));
    }
}
