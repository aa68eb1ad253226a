//! Custom role lifecycle integration tests

#[cfg(test)]
mod tests {
    use crate::common::{RoleFactory, UserFactory};
    use missions_permissions::{
        CustomRoleDraft, CustomRoleUpdate, PermissionAction, PermissionEvaluator, PermissionLeaf,
        PermissionOverrides, PermissionResource, UserType, default_permissions,
    };

    #[test]
    fn test_create_assigns_identity_and_timestamps() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());

        assert!(role.id.starts_with("role-"));
        assert_eq!(role.name, "no-board-creation");
        assert!(role.is_active);
        assert_eq!(role.created_at, role.updated_at);
        assert_eq!(evaluator.get_custom_role(&role.id), Some(role));
    }

    #[test]
    fn test_ids_are_unique() {
        let evaluator = PermissionEvaluator::new();
        let a = evaluator.create_custom_role(CustomRoleDraft::new("same"));
        let b = evaluator.create_custom_role(CustomRoleDraft::new("same"));

        assert_ne!(a.id, b.id);
        assert_eq!(evaluator.get_all_custom_roles().len(), 2);
    }

    #[test]
    fn test_update_merges_and_bumps_updated_at() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());

        let updated = evaluator
            .update_custom_role(&role.id, CustomRoleUpdate::default().description("Renamed"))
            .unwrap();

        assert_eq!(updated.id, role.id);
        assert_eq!(updated.name, role.name);
        assert_eq!(updated.description, "Renamed");
        assert_eq!(updated.custom_permissions, role.custom_permissions);
        assert_eq!(updated.created_at, role.created_at);
        assert!(updated.updated_at > role.updated_at);

        let again = evaluator
            .update_custom_role(&role.id, CustomRoleUpdate::default())
            .unwrap();
        assert!(again.updated_at > updated.updated_at);
    }

    #[test]
    fn test_update_missing_role() {
        let evaluator = PermissionEvaluator::new();
        assert!(
            evaluator
                .update_custom_role("role-missing", CustomRoleUpdate::default().active(false))
                .is_none()
        );
        assert!(evaluator.get_all_custom_roles().is_empty());
    }

    #[test]
    fn test_delete_role_restores_base_permissions() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());
        let member = UserFactory::member_with_role(&role.id);

        assert!(
            !evaluator
                .can_user(&member, &PermissionAction::Create, &PermissionResource::Board, None)
                .allowed
        );

        assert!(evaluator.delete_custom_role(&role.id));
        assert!(!evaluator.delete_custom_role(&role.id));

        assert!(
            evaluator
                .can_user(&member, &PermissionAction::Create, &PermissionResource::Board, None)
                .allowed
        );
        assert_eq!(
            evaluator.get_effective_account_permissions(&member),
            *default_permissions(UserType::Member)
        );
    }

    #[test]
    fn test_replacing_overrides_through_update() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());
        let member = UserFactory::member_with_role(&role.id);

        let mut overrides = PermissionOverrides::default();
        overrides.set(PermissionLeaf::CreateTeams, false);
        evaluator.update_custom_role(&role.id, CustomRoleUpdate::default().permissions(overrides));

        let permissions = evaluator.get_effective_account_permissions(&member);
        assert!(permissions.get(PermissionLeaf::CreateMainBoards));
        assert!(!permissions.get(PermissionLeaf::CreateTeams));
    }

    #[test]
    fn test_granting_role_has_no_effect() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::granting(
            "wannabe-admin",
            &[PermissionLeaf::AccessBilling, PermissionLeaf::DeleteBoards],
        ));

        for user_type in [UserType::Member, UserType::Viewer, UserType::Guest] {
            let user = missions_permissions::PermissionedUser::new(user_type)
                .with_custom_role(&role.id);
            assert_eq!(
                evaluator.get_effective_account_permissions(&user),
                *default_permissions(user_type)
            );
        }
    }

    #[test]
    fn test_roles_listed_oldest_first() {
        let evaluator = PermissionEvaluator::new();
        for name in ["first", "second", "third"] {
            evaluator.create_custom_role(CustomRoleDraft::new(name));
        }

        let roles = evaluator.get_all_custom_roles();
        assert_eq!(roles.len(), 3);
        assert!(roles.windows(2).all(|pair| {
            (pair[0].created_at, &pair[0].id) <= (pair[1].created_at, &pair[1].id)
        }));
        assert_eq!(roles, evaluator.get_all_custom_roles());
    }

    #[test]
    fn test_find_role_by_name() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());

        assert_eq!(
            evaluator.find_custom_role("no-board-creation").map(|r| r.id),
            Some(role.id)
        );
        assert!(evaluator.find_custom_role("unknown").is_none());
    }

    #[test]
    fn test_clones_share_registry() {
        let evaluator = PermissionEvaluator::new();
        let clone = evaluator.clone();

        let role = clone.create_custom_role(CustomRoleDraft::new("shared"));
        assert!(evaluator.get_custom_role(&role.id).is_some());
        assert_eq!(evaluator.store().len(), 1);
    }

    #[test]
    fn test_role_serializes_camel_case() {
        let evaluator = PermissionEvaluator::new();
        let role = evaluator.create_custom_role(RoleFactory::no_board_creation());

        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(
            json["customPermissions"]["boardManagement"]["createMainBoards"],
            false
        );
        assert!(json.get("createdAt").is_some());
    }
}
