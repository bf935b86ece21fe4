//! Literal scene layouts. A space is open floor; every other glyph is a wall.

/// The cottage the story starts and ends in.
pub const HOUSE: &[&str] = &[
    "+------------------------------+",
    "|  |        (o)|    {_____ _}  |",
    "|  |_/_[-|-]___|   |_| ____|_| |",
    "|                  | |     | | |",
    "|     [___]        | |     | | |",
    "|                  | |     | | |",
    "|                  | |     | | |",
    "|                  |_|_____|_| |",
    "| ____                         |",
    "||____|                        |",
    "||____/                        |",
    "|                              |",
    "|                              |",
    "+_____###_____    _____###_____+",
    "              |  |              ",
    "                                ",
];

/// The first forest maze. The `=` on the east wall is the slammed door.
pub const BATTLE_1: &[&str] = &[
    "+---------------------------------------------------------------------+",
    "| #         #             #   #     #                     #   #       |",
    "| ### # ### # ### ##### # # # ### # ### ##### ########### # # ### ### |",
    "|   # #             #   # # #     #   #     #           #   #   # #   |",
    "|## # ############# # ### # ######### ### ############# ####### ### # |",
    "| # # #   #       # # #   #   #       #   #     #     # #     #       =",
    "| # ### # # ##### # # # ##### # ####### ### ### # ### # # ####### # ##|",
    "| #     #   #       # #       # #     # #   # # #   # # # #     # #   |",
    "| ########### ####### ######### ### # # # ### # ### # # # # # ### # # |",
    "|         # #   #     #   #   # #   # # # #   #     # # # # #     # # |",
    "| ### ### # ### # ##### ### # # # ### ### # ######### # # # ######### |",
    "|   #   #     #   #   #     #   #   #   # #       # #   # # #         |",
    "| ##### # ######### # # ########### ### # ### ### # ##### # # ####### |",
    "|     # # #       # #   #           # #   #   # #   #     #   # #   # |",
    "| ### # # # ##### # # ### ########### ##### ### ### # ### ##### # # # |",
    "| # # # # # #     # #   #   #   #     #     #     # #   #         #   |",
    "| # # # ### # ### # # ### # # # # # # # ### # ### # ### ##############|",
    "| #     #   #   # # #     # # #   # # #   # #   #     #   #       #   |",
    "| ####### ##### # # # ### # ### ### ##### # ### ### ##### ### ### ### |",
    "|         #     # # # #   #   # #   #     # #   #       #   # #   #   |",
    "| ######### ####### # ### ### # # ### ##### ### # ### ##### # # ### # |",
    "|     #     #   #   #     #   # #     #   #   # #   #     # # #     # |",
    "|#### # ##### # # ######### ### ####### # ### ### # ##### # # ####### |",
    "|     #       #                         #   #           #     #       |",
    "+---------------------------------------------------------------------+",
];

/// The second, wider maze.
pub const BATTLE_2: &[&str] = &[
    "+-------------------------------------------------------------------------------+",
    "|   %             %       %       %           % %           %       %           |",
    "|%% % % %%% %%% %%% % %%% %%% %%% %%%%% %%%%% % % %%%%% %%%%% %%%%% % %%%%%%% %%|",
    "| % % % %           %   %   % %     %   %       %   % % %   %   % %   %     %   |",
    "| % % %%% %%%%%%%%%%%%% %%% % % %%% % %%%%%%%%%%%%% % % % % %%% % %%%%% %%% % % |",
    "|   %     %         %   % %   %   % %       %     %   %   % %   %     % %   % % |",
    "| %%% %%%%%%%%% %%%%% %%% %%%%% %%% % %%%%% % % %%%%% %%%%% % %%% %%% % % %%%%% |",
    "|   %         % %     %   %     %   %   % % % %   %   %   %   %     % %   %   % |",
    "|%% %%% %%%%% % % %%%%% % % % % % %%%%% % % % %%% % %%% % %%% %%%%% % % % % % % |",
    "| % %       % % % %     %     % % % %   % %     %   %   %   %       % % %   % % |",
    "| % % %%%%% % % % %%% % %%%%% %%% % % %%% %%%%%%%%%%% %%%%% %%%%%%%%%%% %%% % % |",
    "| %   %   % % % %   % % %   % %   %       %         %     % %       %   %   % % |",
    "| %%%%% %%% % % %%% % % % %%% % %%%%%%%%%%% %%%%%%% %%% % % % % %%% % %%%%% % % |",
    "|           %     % % % %     %   %       % %     %       %   %   %   %     %   |",
    "| %%%%%%%%%%%%%%%%% %%% % %%%%%%% % % % % % % %%%%%%%%%%%%%%%%% %%%%%%% % % %%% |",
    "| %       %   %     %   %   %   %   %   % % %   %             %     %   % %   % |",
    "| % %%%%% % % % %%%%% %%%%% % % %%%%%%%%% % % % % %%%%% %%%%%%% % %%% %%% %%%%% |",
    "| %     %   %     %       % % %     %   % % % % % %   %         %   %   %   %   |",
    "| % %%% %%%%% % % % %%%%% % %%% %%% % % % % % % % % % %%%%%%%%%%%%% %%% %%% % %%|",
    "| %   %   %   % % %   % % %     % % % % %   % % % % %       %   %     % % % % % |",
    "| %%% %%% % %%%%% %%% % % %%%%%%% % % % %%%%% % % % %%%%%%% % %%% %%%%% % % % % |",
    "|   %   % %       %   % %   %       % %   %   %   %     % % %   %       % %   % |",
    "|%% %%%%% %%%%%%%%% %%% %%% %%% % % %%%%% % %%%%%%%%%%% % % %%% %%%%%%%%% %%%%% |",
    "|   %     %   %     %     % %   % %       %   %         % %       %           % |",
    "| % % %%%%% % % %%%%% %%%%% % %%%%%%%%% %%%%% %%% %%%%%%% %%%%%%% % %%% %%%%% % |",
    "|   %       % % % %   %     %           %     %   %   %         % %   % %   % % |",
    "| %%% %%%%%%% % % % % % %%%%%%%%%%%%%%% % %%%%% %%% % % %%% %%%%% % %%% %%% % % |",
    "| %       %   % %   % %     %     %   % % %   %     % % % % %     %     %   %   |",
    "| %%%%%%%%% %%% %%%%% %%%%% % %%% % % %%% % % %%%%%%% % % % % %%%%% %%%%% %%%%% |",
    "|           %             %     %   %       %             %         %           |",
    "+-------------------------------------------------------------------------------+",
];

/// The last maze, home of the engraved skull.
pub const BATTLE_3: &[&str] = &[
    "+-----------------------------------------------------------------------------------------+",
    "|     &   &           &                 &     &     &         &   &       &               |",
    "|&&&& & & & &&& &&&&& &&& &&&&& &&&&&&& & &&& & &&& &&&&& &&& &&& & &&&&& & &&& &&&&&&&&& |",
    "|     & & &   &   & &   &   &   &     & & & & & &       &   &   &   & &   & &   &       & |",
    "| &&&&& &&& &&&&& & &&& &&& & &&& &&&&& & & & & &&&&&&& & & &&& & &&& & & & & &&& &&&&& & |",
    "| &       & &     &   &   & &   &     &   &   &   &   & & & &   &     & & & & &   &     & |",
    "| &&&&&&& & & &&&&&&& &&& &&& & & &&& &&&&& &&&&& & & & & & & &&& &&&&& &&& & & &&& &&&&& |",
    "| &       & &   &   &   &       & &   & &   &     & &     & &   & &   &   & &   & &   &   |",
    "| & &&&&&&& &&& & & &&& &&&&&&&&&&& & & & & & &&&&& &&&&&&& &&& &&& & &&& & &&&&& &&& &&& |",
    "| &     &     & & &   &     &       & & &   & &   &     &   &   &     &   &   &     &   & |",
    "| &&& & & &&&&& & &&& &&& & & &&& &&& & &&& & & & &&&&& & &&& &&& &&& & &&&&& &&&&& &&& & |",
    "|   & & &   &   & & &   & & & & & & &   &   & & & &         &   & &   &     &         & & |",
    "| & & & &&& & &&& & &&& & &&& & & & &&& & &&& & & & &&&&& & &&& & & &&& &&& &&& &&&&&&& &&|",
    "|   & &     & &   & &   &       & &     & &     & &   &   & &     & & & & &     &     &   |",
    "| & &&& &&&&& & &&& & & &&&&&&&&& & &&&&& & & &&& &&& & &&& &&&&&&& & & & &&&&&&& &&& &&& |",
    "| &   &     & &   & &     &       & &     & &   &   & &   &     &   &     &     & & & &   |",
    "| & & & &&&&& &&& & &&&&& & &&&&&&&&& &&&&& & & &&& & &&& &&&&& & &&&&&&& & &&& & & & & &&|",
    "|   & & &     &   &     & & &   &     &     & &     &   & &     &   &   &   &   & & & &   |",
    "|&&&& & & &&&&& &&&&& & & & & & & &&&&&&& &&& &&&&&&&&& &&& &&& &&& & & &&& &&&&& & & & & |",
    "|   & & &     &       & & &   & &           &   & &   &     &         & &   &     &   & & |",
    "| & & & &&&&& &&&&&&& &&& & &&& &&&&&&&&&&& &&& & & & &&&&&&&&& & & &&& &&&&& &&&&& & &&& |",
    "| & & &       &     & &   & & &         &   &   &   &     &     & &   &     & &   &   &   |",
    "| &&& &&&&&&& & &&& & & &&& & &&& &&&&& & &&& &&&&&&& &&& & &&&&& & &&&&&&& & &&& &&& & & |",
    "|   &       & &   &   &   &     & &     &   &       & &   & & &   &       & &   &   &   & |",
    "| & &&&&&&& & &&& &&&&&&& &&&&& & &&&&&&&&& &&&&&&& & & &&& & & &&&&& &&& & &&& &&& &&&&& |",
    "| & &       &   & &     &   &   &         &         &       &   &   & & & &   &   &       |",
    "| & & &&&&&&& &&& & &&& &&& & & &&&&&&& & &&&&&&&&&&& &&&&&&& &&& & & & & &&& &&& & &&&&&&|",
    "| & &   &   &   &   &     & & &         & &         & &   &       &   &   & &     & &     |",
    "|&& &&& & & &&& &&&&& &&&&& & &&&&&&& & &&& & &&&&& & & &&& &&&&&&&&&&& &&& &&&&&&& & &&& |",
    "|     &   &   &       &     &     &   & &   & &     & &     &   &     &   &   &     &   & |",
    "| &&&&&&&&&&& &&&&&&&&& &&&&& &&& &&& & & &&& &&&&& & &&&&&&& & &&&&& &&& &&& & &&&&&&& & |",
    "| &           &     &   &   &   &   &   &   &     &   &       & &   &         &   &     & |",
    "| & &&&&&&& & & &&& & &&& & &&& &&& &&&&&&& &&&&& &&&&& &&&&&&& & & &&&&&&&&&&&&& &&& &&& |",
    "|         &     &     &   &       &             &             &   &                       |",
    "+-----------------------------------------------------------------------------------------+",
];
