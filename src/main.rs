// src/main.rs: browser entry, built with Trunk.

use bias_reel_blueprint::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
