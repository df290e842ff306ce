use cube_convert::{
    Color, ConversionError, Corner, CubieCube, Edge, Face, Move, StickerCube,
    geometry::{CORNER_STICKERS, EDGE_STICKERS},
    parse_moves,
};
use log::info;

const SCRAMBLE: &str = "B U D B' L2 D' R' F2 L F D2 R2 F' U2 R B2 L' U'";
const SCRAMBLED_STICKERS: &str = "OGBYWWOOY OWOGYGGBR WBBGGOBRB RWYYBRWYR RBWWROWYG GRGBORYOY";

fn random_cubie_cube(rng: &mut fastrand::Rng) -> CubieCube {
    let mut corner_pieces: [u8; 8] = std::array::from_fn(|i| u8::try_from(i).unwrap());
    let mut edge_pieces: [u8; 12] = std::array::from_fn(|i| u8::try_from(i).unwrap());
    rng.shuffle(&mut corner_pieces);
    rng.shuffle(&mut edge_pieces);

    CubieCube {
        corners: corner_pieces.map(|piece| Corner {
            piece,
            orientation: rng.u8(0..3),
        }),
        edges: edge_pieces.map(|piece| Edge {
            piece,
            flip: rng.bool(),
        }),
    }
}

#[test_log::test]
fn test_solved_stickers_to_identity() {
    let stickers: StickerCube =
        "111111111 222222222 333333333 444444444 555555555 666666666"
            .parse()
            .unwrap();
    let cubies = stickers.to_cubie_cube().unwrap();

    for (i, corner) in cubies.corners.iter().enumerate() {
        assert_eq!(corner.piece as usize, i, "Invalid corner at index {i}");
        assert_eq!(corner.orientation, 0, "Invalid corner at index {i}");
    }
    for (i, edge) in cubies.edges.iter().enumerate() {
        assert_eq!(edge.piece as usize, i, "Invalid edge at index {i}");
        assert!(!edge.flip, "Invalid edge at index {i}");
    }
    assert_eq!(CubieCube::SOLVED.to_sticker_cube(), StickerCube::SOLVED);
}

#[test_log::test]
fn test_scramble_matches_move_engine() {
    let stickers: StickerCube = SCRAMBLED_STICKERS.parse().unwrap();
    let cubies = stickers.to_cubie_cube().unwrap();

    let mut answer = CubieCube::SOLVED;
    answer.apply_moves(&parse_moves(SCRAMBLE).unwrap());
    info!("Scrambled cube:\n{answer}");

    for (i, (expected, actual)) in answer.corners.iter().zip(&cubies.corners).enumerate() {
        assert_eq!(expected, actual, "Invalid corner at index {i}");
    }
    for (i, (expected, actual)) in answer.edges.iter().zip(&cubies.edges).enumerate() {
        assert_eq!(expected, actual, "Invalid edge at index {i}");
    }

    assert_eq!(answer.to_sticker_cube(), stickers);
    assert_eq!(answer.to_sticker_cube().to_string(), SCRAMBLED_STICKERS);
}

#[test_log::test]
fn test_scramble_pieces() {
    let mut cube = CubieCube::SOLVED;
    cube.apply_moves(&parse_moves(SCRAMBLE).unwrap());

    assert_eq!(
        cube.corners.map(|c| (c.piece, c.orientation)),
        [
            (5, 2),
            (7, 1),
            (4, 1),
            (3, 2),
            (0, 2),
            (2, 2),
            (6, 1),
            (1, 0)
        ]
    );
    assert_eq!(
        cube.edges.map(|e| (e.piece, e.flip)),
        [
            (9, true),
            (4, true),
            (5, false),
            (1, false),
            (11, false),
            (6, false),
            (0, true),
            (10, false),
            (8, true),
            (7, true),
            (3, false),
            (2, true)
        ]
    );
}

#[test_log::test]
fn test_roundtrip_random_cubie_cubes() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..1000 {
        let cube = random_cubie_cube(&mut rng);
        let stickers = cube.to_sticker_cube();
        assert_eq!(stickers.to_cubie_cube(), Ok(cube), "{cube}");
        assert_eq!(CubieCube::try_from(&StickerCube::from(&cube)), Ok(cube));
    }
}

#[test_log::test]
fn test_roundtrip_random_scrambles() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let mut cube = CubieCube::SOLVED;
        for _ in 0..25 {
            let face = Face::ALL[rng.usize(0..6)];
            cube.apply_move(Move::new(face, rng.u8(1..4)));
        }
        let stickers = cube.to_sticker_cube();
        assert_eq!(stickers.to_cubie_cube(), Ok(cube));
        assert_eq!(stickers.to_string().parse::<StickerCube>(), Ok(stickers));
    }
}

#[test_log::test]
fn test_conversions_are_deterministic() {
    let stickers: StickerCube = SCRAMBLED_STICKERS.parse().unwrap();
    assert_eq!(stickers.to_cubie_cube(), stickers.to_cubie_cube());

    let cube = stickers.to_cubie_cube().unwrap();
    assert_eq!(cube.to_sticker_cube(), cube.to_sticker_cube());

    let mut broken = stickers;
    broken[CORNER_STICKERS[3][0]] = Color::Yellow;
    assert_eq!(broken.to_cubie_cube(), broken.to_cubie_cube());
}

#[test_log::test]
fn test_corrupted_corner() {
    let colors = [Color::White, Color::Yellow, Color::Green];
    for slot in 0..8 {
        let mut stickers: StickerCube = SCRAMBLED_STICKERS.parse().unwrap();
        for (position, color) in CORNER_STICKERS[slot].into_iter().zip(colors) {
            stickers[position] = color;
        }
        assert_eq!(
            stickers.to_cubie_cube(),
            Err(ConversionError::UnrecognizedCorner(colors))
        );
    }
}

#[test_log::test]
fn test_corrupted_edge() {
    let colors = [Color::Green, Color::Blue];
    for slot in 0..12 {
        let mut stickers = StickerCube::SOLVED;
        for (position, color) in EDGE_STICKERS[slot].into_iter().zip(colors) {
            stickers[position] = color;
        }
        assert_eq!(
            stickers.to_cubie_cube(),
            Err(ConversionError::UnrecognizedEdge(colors))
        );
    }
}

#[test_log::test]
fn test_duplicate_colors_rejected() {
    let mut stickers = StickerCube::SOLVED;
    // Slot 7 shows red, white, green when solved
    stickers[CORNER_STICKERS[7][2]] = Color::Red;
    assert_eq!(
        stickers.to_cubie_cube(),
        Err(ConversionError::UnrecognizedCorner([
            Color::Red,
            Color::White,
            Color::Red
        ]))
    );
}

#[test_log::test]
fn test_forward_writes_every_position_once() {
    let mut written = [0_u8; 54];
    for position in CORNER_STICKERS.iter().flatten().chain(EDGE_STICKERS.iter().flatten()) {
        written[*position] += 1;
    }
    for (position, &count) in written.iter().enumerate() {
        let is_center = position % 9 == 4;
        assert_eq!(count, u8::from(!is_center), "position {position}");
    }
}
