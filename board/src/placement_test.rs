use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn doc_with(players: &[(Position, Team)]) -> Document {
    players
        .iter()
        .fold(Document::new(), |doc, (position, team)| place_player(&doc, *position, *team, pt(100.0, 100.0)))
}

// =============================================================
// Labels
// =============================================================

#[test]
fn first_label_is_position_code() {
    assert_eq!(next_label(&[], Position::CenterMidfield, Team::Home), "CM");
}

#[test]
fn second_same_position_is_numbered_two() {
    let doc = doc_with(&[(Position::CenterMidfield, Team::Home)]);
    assert_eq!(next_label(&doc.players, Position::CenterMidfield, Team::Home), "CM2");
}

#[test]
fn third_striker_on_home_is_st3() {
    let doc = doc_with(&[(Position::Striker, Team::Home), (Position::Striker, Team::Home)]);
    let next = place_player(&doc, Position::Striker, Team::Home, pt(400.0, 200.0));
    assert_eq!(next.players.last().map(|p| p.label.as_str()), Some("ST3"));
}

#[test]
fn first_away_striker_ignores_home_count() {
    let doc = doc_with(&[(Position::Striker, Team::Home), (Position::Striker, Team::Home)]);
    let next = place_player(&doc, Position::Striker, Team::Away, pt(400.0, 200.0));
    let placed = next.players.last();
    assert_eq!(placed.map(|p| p.label.as_str()), Some("ST"));
    assert_eq!(placed.map(|p| p.team), Some(Team::Away));
}

#[test]
fn labels_count_other_positions_separately() {
    let doc = doc_with(&[(Position::CenterBack, Team::Home), (Position::LeftBack, Team::Home)]);
    assert_eq!(next_label(&doc.players, Position::RightBack, Team::Home), "RB");
    assert_eq!(next_label(&doc.players, Position::CenterBack, Team::Home), "CB2");
}

// =============================================================
// Players
// =============================================================

#[test]
fn place_player_appends_at_point() {
    let doc = Document::new();
    let next = place_player(&doc, Position::Goalkeeper, Team::Home, pt(50.0, 200.0));
    assert!(doc.players.is_empty());
    assert_eq!(next.players.len(), 1);
    let player = &next.players[0];
    assert_eq!(player.pos, pt(50.0, 200.0));
    assert_eq!(player.position, Position::Goalkeeper);
    assert!(!player.id.is_empty());
}

#[test]
fn placed_players_get_distinct_ids() {
    let doc = doc_with(&[(Position::Striker, Team::Home), (Position::Striker, Team::Home)]);
    assert_ne!(doc.players[0].id, doc.players[1].id);
}

// =============================================================
// Ball
// =============================================================

#[test]
fn place_ball_sets_singleton() {
    let doc = place_ball(&Document::new(), pt(300.0, 200.0));
    assert_eq!(doc.ball.as_ref().map(|b| b.pos), Some(pt(300.0, 200.0)));
}

#[test]
fn place_ball_twice_replaces() {
    let doc = place_ball(&Document::new(), pt(300.0, 200.0));
    let doc = place_ball(&doc, pt(100.0, 50.0));
    assert_eq!(doc.ball.as_ref().map(|b| b.pos), Some(pt(100.0, 50.0)));
}
