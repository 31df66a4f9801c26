use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::nav::{LEGAL_LINKS, NAV_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"★ MoreStars"}</h3>
                    <p>{"Automated Google review requests by SMS and QR code for local businesses."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Explore"}</h4>
                    <ul>
                        {
                            for NAV_LINKS.iter().map(|link| html! {
                                <li key={link.href}>
                                    <Link<Route> to={Route::from_href(link.href)}>{ link.label }</Link<Route>>
                                </li>
                            })
                        }
                    </ul>
                </div>
                <div class="footer-links">
                    <h4>{"Legal"}</h4>
                    <ul>
                        {
                            for LEGAL_LINKS.iter().map(|link| html! {
                                <li key={link.href}>
                                    <Link<Route> to={Route::from_href(link.href)}>{ link.label }</Link<Route>>
                                </li>
                            })
                        }
                    </ul>
                </div>
            </div>
            <p class="footer-copyright">{ format!("© {} MoreStars. All rights reserved.", year) }</p>
            <style>
                {r#"
                .site-footer {
                    background: #111;
                    color: #999;
                    padding: 3rem 2rem 2rem;
                    border-top: 1px solid rgba(251, 191, 36, 0.1);
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand h3 {
                    color: #FBBF24;
                }
                .footer-links ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-links li {
                    margin-bottom: 0.5rem;
                }
                .footer-links a {
                    color: #bbb;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #FBBF24;
                }
                .footer-copyright {
                    text-align: center;
                    margin-top: 2rem;
                    font-size: 0.85rem;
                }
                @media (max-width: 700px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
