#[cfg(test)]
mod tests {
    use crate::{
        advance, advance_rows, Board, BoardLoader, Boundary, FrameRenderer, LifeError, Pattern,
        RenderOptions, SimConfig, Simulation, StepEngine,
    };
    use std::fs;

    #[test]
    fn test_shape_preserved() {
        for (rows, cols) in [(1, 1), (2, 7), (9, 3), (16, 16)] {
            let mut board = Board::new(rows, cols);
            board.set(0, 0, true).unwrap();
            assert_eq!(advance(&board).shape(), (rows, cols));
        }
    }

    #[test]
    fn test_advance_is_pure() {
        let board = BoardLoader::parse(".O..\n..O.\nOOO.\n....\n").unwrap();
        let snapshot = board.clone();

        let first = advance(&board);
        let second = advance(&board);

        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_no_spontaneous_life() {
        for (rows, cols) in [(0, 0), (0, 5), (5, 0), (1, 1), (6, 4)] {
            let board = Board::new(rows, cols);
            assert_eq!(advance(&board), board);
        }
    }

    #[test]
    fn test_block_away_from_boundary() {
        let mut board = Board::new(6, 6);
        Pattern::Block.stamp(&mut board, 2, 2).unwrap();
        assert_eq!(advance(&board), board);
    }

    #[test]
    fn test_blinker_on_five_by_three() {
        let rows = advance_rows(&[
            vec![0, 0, 0],
            vec![1, 1, 1],
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert_eq!(
            rows,
            vec![
                vec![0, 1, 0],
                vec![0, 1, 0],
                vec![0, 1, 0],
                vec![0, 0, 0],
                vec![0, 0, 0],
            ]
        );

        let back = advance_rows(&rows).unwrap();
        assert_eq!(back[1], vec![1, 1, 1]);
        assert_eq!(back.iter().flatten().filter(|&&c| c == 1).count(), 3);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let board = Board::from_alive(5, 5, &[(2, 2)]).unwrap();
        assert_eq!(advance(&board).alive_count(), 0);
    }

    #[test]
    fn test_surrounded_cell_dies() {
        let board = Board::from_rows(vec![vec![1; 5]; 5]).unwrap();
        assert!(!advance(&board).is_alive(2, 2));
    }

    #[test]
    fn test_corner_cell_does_not_wrap() {
        let board = Board::from_alive(4, 4, &[(0, 0)]).unwrap();
        assert_eq!(advance(&board).alive_count(), 0);
    }

    #[test]
    fn test_corner_cell_wraps_on_torus() {
        // Alive cells in the three other corners are neighbours of (0,0) on a torus
        let board = Board::from_alive(4, 4, &[(3, 3), (0, 3), (3, 0)]).unwrap();

        let dead = StepEngine::new(Boundary::Dead).advance(&board);
        let torus = StepEngine::new(Boundary::Toroidal).advance(&board);

        assert!(!dead.is_alive(0, 0));
        assert!(torus.is_alive(0, 0));
    }

    #[test]
    fn test_malformed_rows_rejected() {
        let err = advance_rows(&[vec![0, 0, 0], vec![0, 0, 0], vec![0, 1]]).unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidBoardShape {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_simulation_saves_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig::from_toml_str(&format!(
            "steps = 4\n[render]\nname_prefix = \"glider\"\noutput_dir = {:?}\n",
            dir.path().display().to_string()
        ))
        .unwrap();

        let mut board = Board::new(10, 10);
        Pattern::Glider.stamp(&mut board, 1, 1).unwrap();
        let start = board.clone();

        let engine = StepEngine::with_threads(config.boundary, config.threads);
        let renderer = FrameRenderer::new(config.render.clone(), Vec::<u8>::new());
        let mut sim = Simulation::new(board, engine, renderer).unwrap();
        sim.propagate(config.steps).unwrap();

        for generation in 0..=4 {
            let path = dir.path().join(format!("glider_{generation}.pbm"));
            let text = fs::read_to_string(&path).unwrap();
            assert!(text.starts_with(&format!("P1\n# Step {generation}\n10 10\n")));
        }
        assert!(!dir.path().join("glider_5.pbm").exists());

        // A glider moves one cell down and right every four generations
        let mut expected = Board::new(10, 10);
        Pattern::Glider.stamp(&mut expected, 2, 2).unwrap();
        assert_eq!(sim.board(), &expected);
        assert_ne!(sim.board(), &start);
    }

    #[test]
    fn test_simulation_shows_frames() {
        let options = RenderOptions {
            show: true,
            save: false,
            ..RenderOptions::default()
        };
        let board = BoardLoader::parse("000\n111\n000\n").unwrap();
        let renderer = FrameRenderer::new(options, Vec::new());
        let mut sim = Simulation::new(board, StepEngine::default(), renderer).unwrap();
        sim.propagate(2).unwrap();
        assert_eq!(sim.generation(), 2);

        let shown = String::from_utf8(sim.into_renderer().into_display()).unwrap();
        assert_eq!(
            shown,
            "Step 0\n...\nOOO\n...\n\n\
             Step 1\n.O.\n.O.\n.O.\n\n\
             Step 2\n...\nOOO\n...\n\n"
        );
    }

    #[test]
    fn test_simulation_disabled_renderer_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let options = RenderOptions {
            show: false,
            save: false,
            output_dir: dir.path().join("frames"),
            ..RenderOptions::default()
        };
        let renderer = FrameRenderer::new(options, Vec::<u8>::new());
        let mut sim = Simulation::new(Board::new(3, 3), StepEngine::default(), renderer).unwrap();
        sim.propagate(3).unwrap();

        assert!(sim.into_renderer().into_display().is_empty());
        assert!(!dir.path().join("frames").exists());
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let err = Board::try_new(usize::MAX, 2).unwrap_err();
        assert!(matches!(
            err,
            LifeError::BoardTooLarge { rows, cols: 2 } if rows == usize::MAX
        ));
    }
}
