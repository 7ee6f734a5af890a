/*
 * Unit tests for the console module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - input parsing of floors, directions and floor arrays
 * - rules extraction and printing
 * - full prompt rounds driven from an in-memory input
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use crate::console::banner::print_banner;
    use crate::console::input::{parse_direction, parse_floors, parse_int};
    use crate::console::rules::{extract_rules, print_rules};
    use crate::console::{Console, ReportFormat};
    use crate::elevator::TripPlanner;
    use crate::error::InputError;
    use crate::shared::Direction::{Down, Up};
    use std::fs;
    use std::io::Cursor;

    fn run_console(input: &str, format: ReportFormat) -> (String, i64) {
        let mut console = Console::new(Cursor::new(input.as_bytes()), Vec::new(), TripPlanner::default(), format);

        if let Err(e) = console.run() {
            panic!("Console failed: {}", e);
        }

        let current_floor = console.session().get_current_floor();
        let output = String::from_utf8(console.into_output()).unwrap();
        (output, current_floor)
    }

    #[test]
    fn test_parse_int_accepts_integers() {
        assert_eq!(parse_int("100"), Ok(100));
        assert_eq!(parse_int("-50"), Ok(-50));
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int(" 100 "), Ok(100));
        assert_eq!(parse_int("3.0"), Ok(3));
        assert_eq!(parse_int("1e3"), Ok(1000));
    }

    #[test]
    fn test_parse_int_rejects_non_integers() {
        for input in ["100.5", "-50.1", "abc", "100abc", "", "   ", "true", "false", "NaN", "inf", "1e300"] {
            assert_eq!(parse_int(input), Err(InputError::NotAnInteger(input.to_string())));
        }
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction("u"), Ok(Up));
        assert_eq!(parse_direction("UP"), Ok(Up));
        assert_eq!(parse_direction("d"), Ok(Down));
        assert_eq!(parse_direction("Down"), Ok(Down));
        assert_eq!(
            parse_direction("sideways"),
            Err(InputError::InvalidDirection("sideways".to_string()))
        );
    }

    #[test]
    fn test_parse_floors() {
        assert_eq!(parse_floors("[1, 3, 15]"), Ok(vec![1, 3, 15]));
        assert_eq!(parse_floors("[]"), Ok(vec![]));
        assert_eq!(parse_floors("[-2, 2.0, \"7\"]"), Ok(vec![-2, 2, 7]));
    }

    #[test]
    fn test_parse_floors_errors() {
        assert_eq!(parse_floors("{}"), Err(InputError::NotAnArray("{}".to_string())));
        assert_eq!(parse_floors("5"), Err(InputError::NotAnArray("5".to_string())));
        assert_eq!(parse_floors("[1, 2"), Err(InputError::MalformedArray("[1, 2".to_string())));
        assert_eq!(parse_floors("[1, 2.5]"), Err(InputError::NotAnIntElement("2.5".to_string())));
        assert_eq!(parse_floors("[1, \"x\"]"), Err(InputError::NotAnIntElement("x".to_string())));
        assert_eq!(parse_floors("[null]"), Err(InputError::NotAnIntElement("null".to_string())));
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::NotAnIntElement("2.5".to_string()).to_string(),
            "Input value: 2.5 is not an int. Please only enter integer values in your floors array."
        );
        assert_eq!(InputError::InvalidDirection("x".to_string()).to_string(), "Please choose either u or d");
    }

    #[test]
    fn test_extract_rules() {
        let text = "Some content before the rules\n### Rules\nRule 1: Follow the rules";

        assert_eq!(extract_rules(text), Some("### Rules\nRule 1: Follow the rules"));
        assert_eq!(extract_rules("Some content without the specific heading"), None);
    }

    #[test]
    fn test_print_rules() {
        // Arrange
        let dir = std::env::temp_dir();
        let with_rules = dir.join(format!("elevator-sim-rules-{}.md", std::process::id()));
        let without_rules = dir.join(format!("elevator-sim-norules-{}.md", std::process::id()));
        let missing = dir.join(format!("elevator-sim-missing-{}.md", std::process::id()));
        fs::write(&with_rules, "# Title\n### Rules\nRule 1: Follow the rules\n").unwrap();
        fs::write(&without_rules, "# Title\nNothing here\n").unwrap();

        // Act
        let mut found = Vec::new();
        let mut not_found = Vec::new();
        let mut unreadable = Vec::new();
        print_rules(&with_rules, &mut found).unwrap();
        print_rules(&without_rules, &mut not_found).unwrap();
        print_rules(&missing, &mut unreadable).unwrap();

        // Assert
        assert_eq!(String::from_utf8(found).unwrap(), "### Rules\nRule 1: Follow the rules\n\n");
        assert_eq!(
            String::from_utf8(not_found).unwrap(),
            "The Rules heading was not found in the README file.\n"
        );
        assert!(unreadable.is_empty());

        // Cleanup
        fs::remove_file(&with_rules).unwrap();
        fs::remove_file(&without_rules).unwrap();
    }

    #[test]
    fn test_banner() {
        let mut out = Vec::new();
        print_banner(&mut out).unwrap();

        let banner = String::from_utf8(out).unwrap();
        assert!(banner.contains("Welcome to Elevator Simulator, a new and exciting game."));
    }

    #[test]
    fn test_console_single_round() {
        // Arrange
        let input = "1\nu\n[5, 10, 20]\n";

        // Act
        let (output, current_floor) = run_console(input, ReportFormat::Text);

        // Assert
        assert!(output.contains("*Ding* Here we go!"));
        assert!(output.contains("Total Travel Time: 190\n"));
        assert!(output.contains("Floors Visited: 1,5,10,20\n"));
        assert!(output.contains("Current Floor: 20\n"));
        assert!(output.contains("What fun, ready for another ride?"));
        assert_eq!(current_floor, 20);
    }

    #[test]
    fn test_console_reprompts_on_invalid_input() {
        // Arrange
        let input = "abc\n1\nx\nd\nnope\n{}\n[1.5]\n[-10, -5, 0]\n";

        // Act
        let (output, current_floor) = run_console(input, ReportFormat::Text);

        // Assert
        assert!(output.contains("The input is not an integer."));
        assert!(output.contains("Please choose either u or d"));
        assert!(output.contains("Invalid input. Please enter a valid array."));
        assert!(output.contains("The input is not an array."));
        assert!(output.contains("Input value: 1.5 is not an int."));
        assert_eq!(output.matches("Please enter your starting floor.").count(), 3);
        assert!(output.contains("Total Travel Time: 110\n"));
        assert!(output.contains("Floors Visited: 1,0,-5,-10\n"));
        assert_eq!(current_floor, -10);
    }

    #[test]
    fn test_console_carries_floor_between_rounds() {
        // Purpose: The second ride starts where the first ended and travels to the new starting floor

        // Arrange
        let input = "1\nu\n[5]\n3\nd\n[2]\n";

        // Act
        let (output, current_floor) = run_console(input, ReportFormat::Text);

        // Assert
        assert!(output.contains("Floors Visited: 1,5\n"));
        assert!(output.contains("Floors Visited: 5,3,2\n"));
        assert!(output.contains("Total Travel Time: 30\n"));
        assert_eq!(current_floor, 2);
    }

    #[test]
    fn test_console_stops_mid_round_on_eof() {
        // Arrange
        let input = "4\nu\n";

        // Act
        let (output, current_floor) = run_console(input, ReportFormat::Text);

        // Assert
        assert!(!output.contains("Here we go"));
        // Starting floor is seeded only once the ride happens
        assert_eq!(current_floor, 0);
    }

    #[test]
    fn test_console_json_report() {
        // Arrange
        let input = "1\nd\n[-10, -5, 0]\n";

        // Act
        let (output, _) = run_console(input, ReportFormat::Json);

        // Assert
        let line = output
            .lines()
            .find(|line| line.starts_with('{'))
            .expect("Expected a JSON report line");
        let report: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(report["visited"], serde_json::json!([1, 0, -5, -10]));
        assert_eq!(report["totalTime"], 110);
        assert_eq!(report["currentFloor"], -10);
    }

    #[test]
    fn test_console_reports_ride_to_highest_floor() {
        // Arrange
        let input = "0\nu\n[9223372036854775807]\n";

        // Act
        let (output, current_floor) = run_console(input, ReportFormat::Text);

        // Assert
        assert!(output.contains("Total Travel Time: 92233720368547758070\n"));
        assert!(output.contains("Floors Visited: 0,9223372036854775807\n"));
        assert_eq!(current_floor, i64::MAX);
    }
}
