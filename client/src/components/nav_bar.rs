// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::SITE_NAME;
use sycamore::prelude::*;

#[component]
pub fn NavBar<G: Html>(ctx: Scope<'_>) -> View<G> {
	view! {
		ctx,
		nav(id="site_nav") {
			div(id="site_nav_brand") {
				span(class="site_nav_heart") { "♥" }
				a(href="/") { (SITE_NAME) }
			}
			ul(id="site_nav_links") {
				li {
					a(href="/speakers") { "Speakers" }
				}
				li {
					a(href="/sponsors") { "Sponsors" }
				}
			}
		}
	}
}
