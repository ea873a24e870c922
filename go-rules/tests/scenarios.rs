use go_rules::{BOARD_SIZE, CellState, Game, GoError, Move, Stage, Stone};

/// Small deterministic generator so random games are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn point(&mut self) -> (i32, i32) {
        let n = BOARD_SIZE as u64;
        ((self.next() % n) as i32, (self.next() % n) as i32)
    }
}

/// Play `plies` random legal moves, keeping the stones in a small corner so that
/// captures, ko and suicide positions actually come up.
fn random_game(seed: u64, plies: usize) -> Game {
    let mut rng = Lcg(seed);
    let mut game = Game::new();
    for _ in 0..plies {
        let (x, y) = rng.point();
        // Retries are cheap: a rejected move changes nothing.
        game.make_move(x % 6, y % 6);
    }
    game
}

#[test]
fn opening_without_captures_then_two_passes() {
    let mut game = Game::new();
    assert!(game.make_move(3, 3));
    assert!(game.make_move(3, 4));
    assert!(game.make_move(4, 4));
    assert!(game.make_move(4, 3));

    assert_eq!(game.board().get(3, 3), Some(CellState::Black));
    assert_eq!(game.board().get(3, 4), Some(CellState::White));
    assert_eq!(game.board().get(4, 4), Some(CellState::Black));
    assert_eq!(game.board().get(4, 3), Some(CellState::White));
    assert!(game.board().ko().is_none());

    assert_eq!(game.play(Move::Pass), Ok(Stage::WhiteToPlay));
    assert_eq!(game.play(Move::Pass), Ok(Stage::Over));
    assert!(game.is_game_over());
    assert!(!game.make_move(10, 10));

    // One open region touching both colors: only the stones count.
    assert_eq!(game.calculate_score(), (2, 2));
    assert_eq!(game.score().winner(), None);
}

#[test]
fn corner_capture_sets_ko() {
    let mut game = Game::new();
    assert!(game.make_move(1, 0));
    assert!(game.make_move(0, 0));
    assert!(game.make_move(0, 1));

    assert_eq!(game.board().get(0, 0), Some(CellState::Empty));
    assert_eq!(game.board().ko(), Some((0, 0)));
    assert_eq!(game.board().last_move(), Some((0, 1)));

    assert_eq!(game.current_player(), Stone::White);
    assert_eq!(game.play(Move::Play((0, 0))), Err(GoError::KoViolation));
    assert_eq!(game.current_player(), Stone::White);
}

#[test]
fn undo_walks_back_to_the_start() {
    let mut rng = Lcg(7);
    let mut game = Game::new();
    let mut states = vec![game.state()];

    while states.len() < 120 {
        let (x, y) = rng.point();
        let mv = if rng.next() % 15 == 0 {
            Move::Pass
        } else {
            Move::Play((x % 6, y % 6))
        };
        match game.play(mv) {
            Ok(Stage::Over) => {
                states.push(game.state());
                break;
            }
            Ok(_) => states.push(game.state()),
            Err(_) => assert_eq!(&game.state(), states.last().unwrap()),
        }
    }

    assert_eq!(game.history_len(), states.len() - 1);
    states.pop();
    while let Some(expected) = states.pop() {
        assert!(game.undo());
        assert_eq!(game.state(), expected);
    }
    assert!(!game.undo());
}

#[test]
fn valid_moves_agree_with_is_valid_move() {
    for seed in [1, 2, 3] {
        let game = random_game(seed, 200);
        let board = game.board();
        for stone in [Stone::Black, Stone::White] {
            let moves = board.get_valid_moves(stone);
            let mut expected = Vec::new();
            for y in 0..BOARD_SIZE {
                for x in 0..BOARD_SIZE {
                    if board.is_valid_move(x, y, stone) {
                        expected.push((x, y));
                    }
                }
            }
            assert_eq!(moves, expected);
        }
    }
}

#[test]
fn random_games_keep_scores_within_the_board() {
    for seed in [11, 12, 13] {
        let game = random_game(seed, 150);
        let (black, white) = game.calculate_score();
        assert!(black + white <= (BOARD_SIZE * BOARD_SIZE) as u32);

        let stones = game
            .board()
            .cells()
            .iter()
            .filter(|c| !c.is_empty())
            .count() as u32;
        assert!(black + white >= stones);
    }
}
