mod common;

use common::ms;
use parking_lot::Mutex;
use snowify_site::reveal::{ElementId, GroupId, Intersection, ObserverOptions, RevealView};
use snowify_site::ScrollReveal;
use tokio::time;

#[derive(Default)]
struct Revealed(Mutex<Vec<ElementId>>);

impl Revealed {
    fn ids(&self) -> Vec<u32> {
        self.0.lock().iter().map(|id| id.0).collect()
    }
}

impl RevealView for Revealed {
    fn reveal(&self, element: ElementId) {
        self.0.lock().push(element);
    }
}

fn seen(id: u32) -> Intersection {
    Intersection {
        element: ElementId(id),
        is_intersecting: true,
    }
}

// Elements 1..=3 share a grid, 10 sits alone in another section.
fn page() -> ScrollReveal<Revealed> {
    let reveal = ScrollReveal::new(Revealed::default());
    for id in 1..=3 {
        reveal.observe(ElementId(id), GroupId(1));
    }
    reveal.observe(ElementId(10), GroupId(2));
    reveal
}

#[test]
fn observer_options_match_the_page_setup() {
    let options = ObserverOptions::default();
    assert_eq!(options.threshold, 0.1);
    assert_eq!(options.root_margin(), "0px 0px -40px 0px");
}

#[tokio::test(start_paused = true)]
async fn reveal_is_staggered_by_position_in_group() {
    let reveal = page();

    assert_eq!(reveal.on_intersection(&[seen(3), seen(10)]), 2);
    assert!(!reveal.is_observed(ElementId(3)));

    time::sleep(ms(1)).await;
    assert_eq!(reveal.view().ids(), vec![10]);

    time::sleep(ms(150)).await;
    assert_eq!(reveal.view().ids(), vec![10]);

    time::sleep(ms(20)).await;
    assert_eq!(reveal.view().ids(), vec![10, 3]);
}

#[tokio::test(start_paused = true)]
async fn each_element_is_revealed_once() {
    let reveal = page();

    assert_eq!(reveal.on_intersection(&[seen(2)]), 1);
    assert_eq!(reveal.on_intersection(&[seen(2)]), 0);
    time::sleep(ms(500)).await;
    assert_eq!(reveal.view().ids(), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn leaving_the_viewport_is_ignored() {
    let reveal = page();
    let gone = Intersection {
        element: ElementId(1),
        is_intersecting: false,
    };

    assert_eq!(reveal.on_intersection(&[gone]), 0);
    assert!(reveal.is_observed(ElementId(1)));
    time::sleep(ms(500)).await;
    assert!(reveal.view().ids().is_empty());
}

#[tokio::test(start_paused = true)]
async fn fallback_reveals_everything_still_observed() {
    let reveal = page();
    reveal.on_intersection(&[seen(1)]);
    reveal.reveal_all();

    let mut now = reveal.view().ids();
    now.sort_unstable();
    assert_eq!(now, vec![2, 3, 10]);

    time::sleep(ms(10)).await;
    let mut all = reveal.view().ids();
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3, 10]);
}
