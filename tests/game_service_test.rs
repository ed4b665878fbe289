//! Tests for session and stateless game service operations.

use strictly_hanoi::{HanoiError, Pole};
use strictly_hanoi_server::{GameService, GameSettings, ServiceError};

#[test]
fn test_new_game_uses_default_disks() {
    let service = GameService::default();
    let state = service.new_game("alice", None).unwrap();
    assert_eq!(state.num_disks, 3);
    assert_eq!(state.poles, vec![vec![3, 2, 1], vec![], vec![]]);
    assert_eq!(state.min_moves, 7);
    assert_eq!(state.legal_moves, vec![[0, 1], [0, 2]]);
    assert!(!state.is_solved);
}

#[test]
fn test_invalid_disk_count_keeps_previous_session() {
    let service = GameService::default();
    service.new_game("alice", Some(4)).unwrap();
    service.make_move("alice", 0, 1).unwrap();

    let err = service.new_game("alice", Some(0)).unwrap_err();
    assert_eq!(err.kind(), "invalid_config");
    assert!(service.new_game("alice", Some(13)).is_err());
    assert!(service.new_game("alice", Some(-2)).is_err());

    let state = service.board("alice").unwrap();
    assert_eq!(state.num_disks, 4);
    assert_eq!(state.moves, 1);
}

#[test]
fn test_rejected_move_leaves_board_unchanged() {
    let service = GameService::default();
    service.new_game("bob", Some(3)).unwrap();
    service.make_move("bob", 0, 1).unwrap();

    let response = service.make_move("bob", 0, 1).unwrap();
    assert!(!response.success);
    assert!(response.reason.is_some());
    assert_eq!(response.poles, vec![vec![3, 2], vec![1], vec![]]);
    assert_eq!(response.moves, Some(1));

    let unknown = service.make_move("bob", 0, 7).unwrap();
    assert!(!unknown.success);
    assert_eq!(service.board("bob").unwrap().moves, 1);
}

#[test]
fn test_solve_does_not_mutate() {
    let service = GameService::default();
    service.new_game("carol", Some(3)).unwrap();

    let solution = service.solve("carol").unwrap().solution;
    assert_eq!(solution.len(), 7);
    assert_eq!(solution[0], [0, 2]);
    assert_eq!(service.board("carol").unwrap().moves, 0);
}

#[test]
fn test_step_to_completion() {
    let service = GameService::default();
    service.new_game("dave", Some(3)).unwrap();

    for _ in 0..7 {
        let response = service.step("dave").unwrap();
        assert!(response.success);
    }

    let state = service.board("dave").unwrap();
    assert!(state.is_solved);
    assert_eq!(state.moves, 7);
    assert_eq!(state.history.len(), 7);
    assert_eq!(service.hint("dave").unwrap().next, None);
    assert_eq!(
        service.step("dave"),
        Err(ServiceError::Game(HanoiError::NoHint))
    );
}

#[test]
fn test_unknown_session() {
    let service = GameService::default();
    assert_eq!(service.board("ghost").unwrap_err().kind(), "session_not_found");
    assert!(service.make_move("ghost", 0, 1).is_err());
    assert!(service.hint("ghost").is_err());
    assert!(service.step("ghost").is_err());
    assert!(service.end_session("ghost").is_err());
}

#[test]
fn test_list_and_end_sessions() {
    let service = GameService::default();
    service.new_game("b", Some(2)).unwrap();
    service.new_game("a", Some(5)).unwrap();

    let listed = service.list_sessions();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].session_id, "a");
    assert_eq!(listed[0].num_disks, 5);

    service.end_session("a").unwrap();
    assert_eq!(service.list_sessions().len(), 1);
}

#[test]
fn test_clones_share_sessions() {
    let service = GameService::default();
    let other = service.clone();
    service.new_game("shared", Some(3)).unwrap();
    other.make_move("shared", 0, 2).unwrap();
    assert_eq!(service.board("shared").unwrap().moves, 1);
}

#[test]
fn test_configured_target_pole() {
    let settings = GameSettings::default().with_target_pole(Pole::Middle);
    let service = GameService::new(settings);
    service.new_game("m", Some(1)).unwrap();

    assert_eq!(service.hint("m").unwrap().next, Some([0, 1]));
    let response = service.make_move("m", 0, 1).unwrap();
    assert!(response.is_solved);
}

#[test]
fn test_stateless_operations() {
    let service = GameService::default();

    let created = service.create_board(Some(3)).unwrap();
    assert_eq!(created.poles, vec![vec![3, 2, 1], vec![], vec![]]);

    let moved = service.evaluate_move(created.poles.clone(), 3, 0, 2).unwrap();
    assert!(moved.success);
    assert_eq!(moved.poles, vec![vec![3, 2], vec![], vec![1]]);
    assert_eq!(moved.moves, None);

    let hint = service.evaluate_hint(vec![vec![2, 1], vec![], vec![3]], 3).unwrap();
    assert_eq!(hint.next, Some([0, 1]));

    let solution = service
        .evaluate_solve(vec![vec![2, 1], vec![], vec![3]], 3)
        .unwrap();
    assert_eq!(solution.solution, vec![[0, 1], [0, 2], [1, 2]]);
}

#[test]
fn test_stateless_rejects_malformed_board() {
    let service = GameService::default();
    let err = service
        .evaluate_move(vec![vec![1, 2], vec![], vec![]], 2, 0, 1)
        .unwrap_err();
    assert_eq!(err.kind(), "invalid_config");
    assert!(service.evaluate_hint(vec![vec![2, 1]], 2).is_err());
    assert!(service.evaluate_solve(vec![vec![2, 1], vec![], vec![]], 30).is_err());
}
