//! Feste Dokument-Fragmente der Statusseite
//!
//! Der Renderer setzt diese Fragmente unverändert zusammen; geparst
//! wird hier nichts. Die Texte enthalten bereits die HTTP-Statuszeile
//! und die Header.

/// Seitenkopf bis einschließlich der öffnenden Button-Zeile
pub const PAGE_HEAD: &str = concat!(
    "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n",
    "<!DOCTYPE html>",
    "<html>\n",
    "    <head>\n",
    "        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, user-scalable=no\">\n",
    "        <link rel=\"icon\" href=\"data:;base64,=\">",
    "        <title>ESP32 LED control</title>\n",
    "        <style>\n",
    "            html { \n",
    "                font-family: Helvetica; \n",
    "                margin: 0px 0px; \n",
    "                width: 100vw;\n",
    "                height: 100vh;\n",
    "                overflow: auto;",
    "            }\n",
    "            body { \n",
    "                margin-top: 50px;\n",
    "            } \n",
    "            h2 { \n",
    "                margin: 50px auto 30px;\n",
    "            } \n",
    "            h4 {\n",
    "                margin-bottom: 50px;\n",
    "            }\n",
    "            p {\n",
    "                font-size: 14px;\n",
    "            }\n",
    "            .buttons {\n",
    "                display: flex; \n",
    "                width: 70vh; \n",
    "            }\n",
    "            .button {\n",
    "                display: block;\n",
    "                width: 70px;\n",
    "                border: none;\n",
    "                color: white;\n",
    "                padding: 10px 20px;\n",
    "                text-decoration: none;\n",
    "                font-size: 20px;\n",
    "                margin: 0px 20px 35px;\n",
    "                cursor: pointer;\n",
    "                border-radius: 4px;\n",
    "            }\n",
    "            .off { \n",
    "                background-color: #3498db;\n",
    "            }\n",
    "            .on { \n",
    "                background-color: blue;\n",
    "            }\n",
    "        </style>\n",
    "    </head>\n",
    "    <body>\n",
    "        <div class=\"content\">\n",
    "            <h2>ESP32 Web Server</h1>\n",
    "            <h4>Change the animation speed</h2>\n",
    "            <div class=\"buttons\">\n",
);

/// Trenner zwischen den Geschwindigkeits- und Muster-Buttons
pub const ANIMATION_SECTION: &str = concat!(
    "</div>\n<h2>Change the animation</h2>\n",
    "               <div class=\"buttons\">\n",
);

/// Zeilenumbruch innerhalb einer Button-Gruppe
pub const ROW_BREAK: &str = concat!("</div>\n", "               <div class=\"buttons\">\n",);

/// Seitenabschluss
pub const PAGE_END: &str = concat!(
    "</div>\n",
    "        </div>\n",
    "    </body>\n",
    "</html>\r\n\r\n",
);

/// Antwort auf unbekannte Pfade
pub const PAGE_NOT_FOUND: &str = "HTTP/1.1 404 Not Found\r\n\r\n";

/// Antwort auf Favicon-Anfragen
pub const PAGE_NO_CONTENT: &str = "HTTP/1.1 204 No Content\r\n\r\n";
