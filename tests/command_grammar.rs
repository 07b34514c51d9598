// tests/command_grammar.rs
use toy_robot::{Command, DimensionsRequest, PlaceCommand, SimulationError, chomp};

#[test]
fn test_chomp_strips_one_line_terminator() {
    assert_eq!(chomp("MOVE\n"), "MOVE");
    assert_eq!(chomp("MOVE\r\n"), "MOVE");
    assert_eq!(chomp("MOVE"), "MOVE");
    assert_eq!(chomp(" MOVE \n"), " MOVE ", "inner whitespace is significant");
}

#[test]
fn test_dimensions_line() {
    assert_eq!("".parse(), Ok(DimensionsRequest::Default));
    assert_eq!(
        "2,3".parse(),
        Ok(DimensionsRequest::Explicit { length: 2, width: 3 })
    );
    assert_eq!(
        "12,99".parse(),
        Ok(DimensionsRequest::Explicit {
            length: 12,
            width: 99
        })
    );

    for bad in ["2 3", "0,5", "10,5", "-1,5", "5,", ",5", "a,b", " 2,3", "2,3,4"] {
        assert_eq!(
            bad.parse::<DimensionsRequest>(),
            Err(SimulationError::Dimensions),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_dimensions_overflow_is_a_format_error() {
    assert_eq!(
        "99999999999,5".parse::<DimensionsRequest>(),
        Err(SimulationError::Dimensions)
    );
}

#[test]
fn test_place_line() {
    let cmd: PlaceCommand = "PLACE 1,2,EAST".parse().unwrap();
    assert_eq!(cmd.x, 1);
    assert_eq!(cmd.y, 2);
    assert_eq!(cmd.direction, "EAST");

    let lower: PlaceCommand = "place 0,10,north".parse().unwrap();
    assert_eq!((lower.x, lower.y), (0, 10));
    assert_eq!(lower.direction, "NORTH");

    let unknown: PlaceCommand = "PLACE 1,3,SOMEWHERE".parse().unwrap();
    assert_eq!(
        unknown.direction, "SOMEWHERE",
        "direction words are checked by the robot, not the grammar"
    );
}

#[test]
fn test_place_line_rejections() {
    for bad in [
        "PLACE 1 3 EAST",
        "MOVE",
        "PLACE -1,2,EAST",
        "PLACE 1,2",
        "PLACE 1,2,EAST ",
        "PLACE  1,2,EAST",
        "PLACE 1,2,EAST1",
        "",
    ] {
        assert_eq!(
            bad.parse::<PlaceCommand>(),
            Err(SimulationError::Format),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_place_coordinate_overflow_saturates() {
    let cmd: PlaceCommand = "PLACE 99999999999,1,EAST".parse().unwrap();
    assert_eq!(cmd.x, i32::MAX);
    assert_eq!(cmd.y, 1);
}

#[test]
fn test_operating_commands() {
    let cases = [
        ("MOVE", Command::Move),
        ("left", Command::Left),
        ("Right", Command::Right),
        ("REPORT", Command::Report),
        ("exit", Command::Exit),
    ];
    for (line, expected) in cases {
        assert_eq!(line.parse(), Ok(expected), "{line:?}");
    }

    for bad in ["STEP", "", "MOVE ", "PLACE 1,2,EAST", "MOVES"] {
        assert_eq!(
            bad.parse::<Command>(),
            Err(SimulationError::UnknownCommand),
            "{bad:?} should be unknown"
        );
    }
}
