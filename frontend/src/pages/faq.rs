use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::page_hero::PageHero;
use crate::icons::Icon;
use crate::scroll_spy::hook::{use_scroll_spy, TableOfContents};
use crate::scroll_spy::tracker::Section;

const SCROLL_OFFSET: f64 = 150.0;
const HEADER_CLEARANCE: f64 = 100.0;

pub const FAQ_SECTIONS: &[Section] = &[
    Section { id: "getting-started", title: "Getting Started", icon: Icon::Star },
    Section { id: "sms-requests", title: "SMS Requests", icon: Icon::Message },
    Section { id: "qr-codes", title: "QR Codes", icon: Icon::QrCode },
    Section { id: "compliance", title: "Compliance", icon: Icon::Shield },
    Section { id: "billing", title: "Billing", icon: Icon::Card },
    Section { id: "integrations", title: "Integrations", icon: Icon::Gears },
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let spy = use_scroll_spy(FAQ_SECTIONS, SCROLL_OFFSET, HEADER_CLEARANCE);

    html! {
        <div class="faq-page">
            <PageHero
                title="Frequently Asked Questions"
                subtitle="Everything you need to know about collecting reviews with MoreStars."
            />
            <div class="toc-layout">
                <TableOfContents
                    sections={FAQ_SECTIONS}
                    active_id={spy.active_id}
                    on_select={spy.on_select}
                />
                <div class="page-body">
                    <section id="getting-started">
                        <h2>{"Getting Started"}</h2>
                        <FaqItem question="How long does setup take?">
                            <p>{"About five minutes. Connect your Google Business Profile, confirm your sending number, and you're ready to send your first request."}</p>
                        </FaqItem>
                        <FaqItem question="Do I need any technical skills?">
                            <p>{"No. If you can send a text message, you can use MoreStars. Integrations are optional."}</p>
                        </FaqItem>
                        <FaqItem question="Can I try it before paying?">
                            <p>{"Every plan includes a 14-day free trial with no credit card required."}</p>
                        </FaqItem>
                    </section>

                    <section id="sms-requests">
                        <h2>{"SMS Requests"}</h2>
                        <FaqItem question="What does the text message say?">
                            <p>{"A short, friendly note with your business name and a direct link to your Google review form. You can edit the wording at any time."}</p>
                        </FaqItem>
                        <FaqItem question="When are requests sent?">
                            <p>{"Right after you mark a job complete, or at a delay you choose. Messages are never sent late at night."}</p>
                        </FaqItem>
                        <FaqItem question="Will customers get spammed?">
                            <p>{"No. Each customer gets one request and at most one reminder. Anyone who replies STOP is never contacted again."}</p>
                        </FaqItem>
                    </section>

                    <section id="qr-codes">
                        <h2>{"QR Codes"}</h2>
                        <FaqItem question="What can I print the QR code on?">
                            <p>{"Counter cards, receipts, invoices, business cards, table tents and vehicle decals all work well. We provide print-ready templates."}</p>
                        </FaqItem>
                        <FaqItem question="Where does the QR code lead?">
                            <p>{"Straight to your Google review form. No app download and no extra steps."}</p>
                        </FaqItem>
                    </section>

                    <section id="compliance">
                        <h2>{"Compliance"}</h2>
                        <FaqItem question="Is this allowed by Google?">
                            <p>{"Yes. Google encourages businesses to ask customers for reviews. MoreStars never filters out unhappy customers or offers incentives, both of which break Google's policies."}</p>
                        </FaqItem>
                        <FaqItem question="What about SMS consent rules?">
                            <p>{"You should only send requests to customers who gave you their number as part of doing business with you. Every message includes opt-out instructions."}</p>
                        </FaqItem>
                    </section>

                    <section id="billing">
                        <h2>{"Billing"}</h2>
                        <FaqItem question="Can I change plans later?">
                            <p>{"Upgrade or downgrade any time from your dashboard. Changes are prorated automatically."}</p>
                        </FaqItem>
                        <FaqItem question="What happens if I run out of messages?">
                            <p>{"We'll let you know before you hit your limit. You can add a message pack or upgrade, and QR codes keep working regardless."}</p>
                        </FaqItem>
                    </section>

                    <section id="integrations">
                        <h2>{"Integrations"}</h2>
                        <FaqItem question="Which tools do you connect to?">
                            <p>{"Shopify, Stripe and Zapier out of the box. Zapier connects MoreStars to thousands of other apps, including most field service and booking tools."}</p>
                        </FaqItem>
                        <FaqItem question="Can I import my existing customers?">
                            <p>{"Yes, upload a CSV and choose whether to send requests right away or only to new customers going forward."}</p>
                        </FaqItem>
                    </section>
                </div>
            </div>
            <style>
                {r#"
                .faq-item {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(251, 191, 36, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(251, 191, 36, 0.3);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .faq-question:hover {
                    color: #FBBF24;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #FBBF24;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #bbb;
                    transition: all 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
