// Pet list rendering through the in-memory page

mod common;

use common::{init_logger, logged, pet_xml, pets_document};
use futures::executor::block_on;
use log::Level;
use viapets_showcase::dom::MemoryDom;
use viapets_showcase::fetch::StaticSource;
use viapets_showcase::renderers::images::CAT_IMAGES;
use viapets_showcase::renderers::{FixedSelector, RandomSelector, ScriptedSelector};
use viapets_showcase::showcase::PetListRenderer;
use viapets_showcase::{FetchError, ShowcaseConfig, ShowcaseError};

const PETS_URL: &str = "../savedInformation/petsForWebsite.xml";

fn page() -> MemoryDom {
    MemoryDom::with_elements(["pets", "noPetsMessage", "freeSpaces"])
}

fn config_with_url(url: &str) -> ShowcaseConfig {
    ShowcaseConfig {
        pets_url: url.to_string(),
        ..ShowcaseConfig::default()
    }
}

#[test]
fn test_one_card_per_record_in_order() {
    init_logger();
    let xml = pets_document(&[
        pet_xml("Dog", "Beagle", "Rex", "4", "Brown", "Male", "1200.0"),
        pet_xml("Rodent", "Hamster", "Nibbles", "1", "White", "Female", "80.0"),
        pet_xml("Bird", "Parrot", "Polly", "7", "Green", "Female", "300.0"),
    ]);
    let source = StaticSource::new().with_text(PETS_URL, &xml);
    let dom = page();

    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = block_on(renderer.run(&source, &dom)).expect("render should succeed");

    assert_eq!(report.total, 3);
    assert_eq!(report.rendered, 3);
    assert!(report.skipped.is_empty());

    let cards = dom.children("pets");
    assert_eq!(cards.len(), 3);
    assert!(cards[0].contains("Rex"));
    assert!(cards[1].contains("Nibbles"));
    assert!(cards[1].contains("Hamster.jpg"));
    assert!(cards[2].contains("Polly"));
    assert_eq!(dom.display("noPetsMessage"), None);
    assert_eq!(source.requests(), vec![PETS_URL.to_string()]);
}

#[test]
fn test_empty_list_shows_notice_and_no_cards() {
    init_logger();
    let source = StaticSource::new().with_text(PETS_URL, &pets_document(&[]));
    let dom = page();

    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = block_on(renderer.run(&source, &dom)).unwrap();

    assert!(report.empty);
    assert_eq!(report.total, 0);
    assert_eq!(dom.display("noPetsMessage").as_deref(), Some("flex"));
    assert!(dom.children("pets").is_empty());
}

#[test]
fn test_fish_always_uses_fish_image() {
    init_logger();
    let xml = pets_document(&[
        pet_xml("Fish", "Goldfish", "Bubbles", "1", "Gold", "Female", "50.0"),
        pet_xml("Fish", "Guppy", "Gil", "2", "Blue", "Male", "15.0"),
    ]);

    for pick in [0, 1] {
        let dom = page();
        let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(pick));
        renderer.render_document(&xml, &dom).unwrap();
        for card in dom.children("pets") {
            assert!(card.contains("fish.jpg"), "fish card without fish image: {}", card);
        }
    }
}

#[test]
fn test_dog_image_follows_selector() {
    init_logger();
    let xml = pets_document(&[pet_xml("Dog", "Pug", "Otto", "3", "Fawn", "Male", "900")]);

    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(1));
    renderer.render_document(&xml, &dom).unwrap();
    let cards = dom.children("pets");
    let card = &cards[0];
    assert!(card.contains("dog.jpg"));
    assert!(!card.contains("dog1.jpg"));

    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    renderer.render_document(&xml, &dom).unwrap();
    let cards = dom.children("pets");
    let card = &cards[0];
    assert!(card.contains("dog1.jpg"));
    assert!(!card.contains("dog.jpg"));
}

#[test]
fn test_selector_consulted_once_per_two_image_card() {
    init_logger();
    let xml = pets_document(&[
        pet_xml("Cat", "Persian", "Tom", "2", "Black", "Male", "500"),
        pet_xml("Fish", "Guppy", "Gil", "2", "Blue", "Male", "15"),
        pet_xml("Bird", "Canary", "Tweety", "1", "Yellow", "Female", "120"),
    ]);
    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), ScriptedSelector::new([0, 1]));
    renderer.render_document(&xml, &dom).unwrap();

    assert_eq!(renderer.selector().requests(), &[2, 2]);
    let cards = dom.children("pets");
    assert!(cards[0].contains("Cat2.jpg"));
    assert!(cards[2].contains("bird.jpg"));
}

#[test]
fn test_all_text_fields_appear_verbatim() {
    init_logger();
    let fields = ["Golden Retriever", "Buddy", "5", "Golden", "Male", "2499.95"];
    let xml = pets_document(&[pet_xml(
        "Dog", fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
    )]);
    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    renderer.render_document(&xml, &dom).unwrap();

    let cards = dom.children("pets");
    let card = &cards[0];
    for value in fields {
        assert!(card.contains(value), "card is missing '{}': {}", value, card);
    }
    assert!(card.contains("2499.95dkk"));
}

#[test]
fn test_single_cat_scenario() {
    init_logger();
    let xml = pets_document(&[pet_xml("Cat", "Cat", "Tom", "2", "Black", "Male", "500")]);
    let source = StaticSource::new().with_text(PETS_URL, &xml);
    let dom = page();

    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), RandomSelector);
    let report = block_on(renderer.run(&source, &dom)).unwrap();
    assert_eq!(report.rendered, 1);

    let cards = dom.children("pets");
    assert_eq!(cards.len(), 1);
    for value in ["Cat", "Tom", "2", "Black", "Male", "500"] {
        assert!(cards[0].contains(value));
    }
    assert!(CAT_IMAGES.iter().any(|image| cards[0].contains(image)));
}

#[test]
fn test_invalid_record_skipped_neighbours_rendered() {
    init_logger();
    let broken = "<Cat>\n\t<species>Sphynx</species>\n\t<name>Skipme</name>\n\t<age>3</age>\n</Cat>\n".to_string();
    let xml = pets_document(&[
        pet_xml("Rodent", "Guinea pig", "Pip", "2", "Brown", "Male", "150"),
        broken,
        pet_xml("Fish", "Betta", "Blue", "1", "Blue", "Male", "60"),
    ]);
    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = renderer.render_document(&xml, &dom).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.rendered, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].position, 1);
    assert_eq!(report.skipped[0].tag, "Cat");
    assert!(report.skipped[0].reason.contains("color"));
    assert!(logged(Level::Warn, "Skipping pet #1 <Cat>"));

    let cards = dom.children("pets");
    assert_eq!(cards.len(), 2);
    assert!(cards.iter().all(|card| !card.contains("Skipme")));
}

#[test]
fn test_pet_without_breed_or_gender_is_rendered() {
    init_logger();
    let xml = pets_document(&[pet_xml("Dog", "", "Rex", "4", "Brown", "", "1.0E7")]);
    let source = StaticSource::new().with_text(PETS_URL, &xml);
    let dom = page();

    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = block_on(renderer.run(&source, &dom)).unwrap();

    assert_eq!(report.total, 1);
    assert_eq!(report.rendered, 1);
    assert!(report.skipped.is_empty());
    assert_eq!(dom.display("noPetsMessage"), None);

    let cards = dom.children("pets");
    assert_eq!(cards.len(), 1);
    assert!(cards[0].contains("Rex"));
    assert!(cards[0].contains("1.0E7dkk"));
}

#[test]
fn test_self_closing_species_is_rendered() {
    init_logger();
    let entry = "<Cat>\n\t<species/>\n\t<name>Mia</name>\n\t<age>1</age>\n\t<color>White</color>\n\t<gender/>\n\t<price>300.0</price>\n</Cat>\n".to_string();
    let xml = pets_document(&[entry]);
    let dom = page();

    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = renderer.render_document(&xml, &dom).unwrap();

    assert_eq!(report.rendered, 1);
    assert_eq!(dom.children("pets").len(), 1);
}

#[test]
fn test_all_entries_invalid_keeps_notice_hidden() {
    init_logger();
    let xml = pets_document(&[
        pet_xml("Snake", "Python", "Kaa", "3", "Green", "Male", "400"),
        pet_xml("Dog", "Beagle", "Rex", "four", "Brown", "Male", "1200"),
        pet_xml("Cat", "Persian", "Tom", "2", "Black", "Male", "free"),
    ]);
    let source = StaticSource::new().with_text(PETS_URL, &xml);
    let dom = page();

    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = block_on(renderer.run(&source, &dom)).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.rendered, 0);
    assert_eq!(report.skipped.len(), report.total);
    assert!(!report.empty);
    assert_eq!(dom.display("noPetsMessage"), None);
    assert!(dom.children("pets").is_empty());
}

#[test]
fn test_unknown_category_skipped() {
    init_logger();
    let xml = pets_document(&[
        pet_xml("Lizard", "Gecko", "Spike", "2", "Green", "Male", "250"),
        pet_xml("Dog", "Husky", "Storm", "3", "Grey", "Female", "1800"),
    ]);
    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    let report = renderer.render_document(&xml, &dom).unwrap();

    assert_eq!(report.rendered, 1);
    assert_eq!(report.skipped[0].tag, "Lizard");
    assert_eq!(report.skipped[0].reason, "unknown category <Lizard>");
    assert!(!report.empty);
    assert_eq!(dom.display("noPetsMessage"), None);
}

#[test]
fn test_field_markup_is_escaped() {
    init_logger();
    let xml = pets_document(&[pet_xml(
        "Cat", "Maine Coon", "&lt;img src=x onerror=alert(1)&gt;", "4", "Grey", "Female", "700",
    )]);
    let dom = page();
    let mut renderer = PetListRenderer::new(&ShowcaseConfig::default(), FixedSelector(0));
    renderer.render_document(&xml, &dom).unwrap();

    let cards = dom.children("pets");
    let card = &cards[0];
    assert!(!card.contains("<img src=x"));
    assert!(card.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn test_fetch_failure_logged_and_page_untouched() {
    init_logger();
    let url = "https://unreachable.test/pets-fetch-failure.xml";
    let source = StaticSource::new().with_error(
        url,
        FetchError::Network {
            url: url.to_string(),
            message: "connection refused".to_string(),
        },
    );
    let dom = page();

    let mut renderer = PetListRenderer::new(&config_with_url(url), FixedSelector(0));
    let result = block_on(renderer.run(&source, &dom));

    assert!(matches!(result, Err(ShowcaseError::Fetch(FetchError::Network { .. }))));
    assert!(logged(Level::Error, "pets-fetch-failure.xml"));
    assert!(dom.children("pets").is_empty());
    assert_eq!(dom.display("noPetsMessage"), None);
}

#[test]
fn test_missing_file_is_fetch_failure() {
    init_logger();
    let dom = page();
    let mut renderer = PetListRenderer::new(&config_with_url("missing-pets-404.xml"), FixedSelector(0));
    let result = block_on(renderer.run(&StaticSource::new(), &dom));

    assert!(matches!(
        result,
        Err(ShowcaseError::Fetch(FetchError::Status { status: 404, .. }))
    ));
    assert!(logged(Level::Error, "missing-pets-404.xml answered with HTTP 404"));
}

#[test]
fn test_malformed_document_logged() {
    init_logger();
    let url = "malformed-pets.xml";
    let source = StaticSource::new().with_text(url, "<pets><Dog><name>Rex</Dog>");
    let dom = page();

    let mut renderer = PetListRenderer::new(&config_with_url(url), FixedSelector(0));
    let result = block_on(renderer.run(&source, &dom));

    assert!(matches!(result, Err(ShowcaseError::Parse(_))));
    assert!(logged(Level::Error, "pet list could not be parsed"));
    assert!(dom.children("pets").is_empty());
}

#[test]
fn test_custom_page_layout() {
    init_logger();
    let config = ShowcaseConfig::from_yaml(
        "petsUrl: data/pets.xml\npetsContainerId: adoptions\nimageDir: /static/pets\ncurrency: ' kr'\n",
    )
    .unwrap();
    let xml = pets_document(&[pet_xml("Rodent", "Rat", "Remy", "1", "Grey", "Male", "60")]);
    let source = StaticSource::new().with_text("data/pets.xml", &xml);
    let dom = MemoryDom::with_elements(["adoptions", "noPetsMessage"]);

    let mut renderer = PetListRenderer::new(&config, FixedSelector(0));
    block_on(renderer.run(&source, &dom)).unwrap();

    let cards = dom.children("adoptions");
    let card = &cards[0];
    assert!(card.contains("Hamster.jpg"));
    assert!(card.contains("static"));
    assert!(card.contains("60 kr"));
}
