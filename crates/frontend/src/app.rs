use helpdesk_chat_ui::{ChatClient, ChatConfig, ChatWidget, ServiceHandle};
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ChatConfig::default());

    let service = use_memo((), {
        let config = Rc::clone(&config);
        move |_| match ChatClient::from_config(&config) {
            Ok(client) => {
                tracing::info!(base_url = %client.base_url(), "Chat client ready");
                Ok(ServiceHandle::new(client))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create chat client");
                Err(e.to_string())
            }
        }
    });

    html! {
        <div class="h-screen p-4 bg-gray-100 dark:bg-gray-900">
            <div class="max-w-3xl h-full mx-auto shadow-md">
                {match &*service {
                    Ok(service) => html! {
                        <ChatWidget
                            service={service.clone()}
                            config={Rc::clone(&config)}
                            title={Some("IT Helpdesk Assistant".to_string())}
                        />
                    },
                    Err(message) => html! {
                        <div class="bg-red-50 dark:bg-red-900 text-red-700 dark:text-red-300 p-3 rounded text-sm">
                            {format!("Chat is unavailable: {message}")}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
