use super::*;

#[test]
fn parses_items_in_file_order() {
    let catalog = Catalog::parse(
        "[DM]\n\
         check my ___ baby|DM\n\
         we in the ___ now|zone\n\
         [WE GO]\n\
         tonight we ___|go\n",
    );
    let songs: Vec<&str> = catalog.items().iter().map(|i| i.song.as_str()).collect();
    assert_eq!(songs, ["DM", "DM", "WE GO"]);
    assert_eq!(catalog.items()[0].answer, "DM");
    assert_eq!(catalog.items()[2].question, "tonight we ___");
}

#[test]
fn skips_blank_lines() {
    let catalog = Catalog::parse("\n[DM]\n\ncheck my ___ baby|DM\n\n");
    assert_eq!(catalog.len(), 1);
}

#[test]
fn drops_data_lines_before_any_song_header() {
    let catalog = Catalog::parse("orphan ___ line|nope\n[DM]\ncheck my ___ baby|DM\n");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.items()[0].song, "DM");
}

#[test]
fn rejects_questions_without_a_blank() {
    let catalog = Catalog::parse("[DM]\nno blank here|oops\ncheck my ___ baby|DM\n");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.items()[0].question.contains(BLANK_MARKER));
}

#[test]
fn trims_the_answer_field() {
    let catalog = Catalog::parse("[DM]\ncheck my ___ baby|  DM  \n");
    assert_eq!(catalog.items()[0].answer, "DM");
}

#[test]
fn splits_question_on_first_separator_only() {
    let catalog = Catalog::parse("[DM]\na ___ b|x|y\n");
    assert_eq!(catalog.items()[0].question, "a ___ b");
    assert_eq!(catalog.items()[0].answer, "x|y");
}

#[test]
fn reveals_first_accepted_answer() {
    let item = QuizItem {
        song: "Flover".to_owned(),
        question: "my one and only ___".to_owned(),
        answer: "flover, 플로버".to_owned(),
    };
    assert_eq!(item.revealed(), "my one and only flover");
}

#[test]
fn missing_file_yields_empty_catalog() {
    let catalog = Catalog::open(Path::new("does/not/exist.txt"));
    assert!(catalog.is_empty());
}
