mod chat_tests;
mod routing_tests;
